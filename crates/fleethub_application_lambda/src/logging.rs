//! Tracing subscriber initialisation for the Lambda binary.
//!
//! Handlers only emit events; the binary installs the subscriber once at
//! startup. Output goes to stderr, which Lambda forwards to CloudWatch.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ProviderConfig, DEFAULT_LOG_FILTER};

pub fn init_logging(config: &ProviderConfig) -> Result<(), TryInitError> {
    let filter = build_filter(&config.log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
}

/// Invalid directives fall back to the default filter rather than failing
/// startup.
fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
