//! Fleet Hub application resource provider domain primitives.
//!
//! This crate owns the resource model, the provider protocol contract, the
//! remote API contract and the pure translation between them. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod api;
pub mod classifier;
pub mod contract;
pub mod model;
pub mod translator;
pub mod validation;
