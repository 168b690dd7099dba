//! AWS-oriented adapters and handlers for the Fleet Hub application resource
//! provider.
//!
//! This crate owns runtime integration details (Lambda entry point, the
//! Fleet Hub SDK adapter, logging and configuration) and the lifecycle
//! handlers that drive `fleethub_application_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
