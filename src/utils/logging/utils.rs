//! Subscriber setup for applications embedding the engine

use tracing_subscriber::EnvFilter;

use super::types::LogLevel;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Install a human-readable `tracing` subscriber
    ///
    /// `RUST_LOG` takes precedence over `log_level` when set. Returns false
    /// if a global subscriber was already installed, leaving it in place.
    pub fn init_logger(log_level: Option<LogLevel>) -> bool {
        tracing_subscriber::fmt()
            .with_env_filter(Self::filter(log_level))
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
            .is_ok()
    }

    /// Install a JSON `tracing` subscriber for structured log pipelines
    pub fn init_json_logger(log_level: Option<LogLevel>) -> bool {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(Self::filter(log_level))
            .with_current_span(false)
            .try_init()
            .is_ok()
    }

    fn filter(log_level: Option<LogLevel>) -> EnvFilter {
        let level = log_level.unwrap_or_default();
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
    }
}
