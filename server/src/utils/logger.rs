//! Logging Infrastructure
//!
//! Structured logging setup for development and production environments.

use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the logger from configuration
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured, output goes to a daily rolling file instead
/// of stderr.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = config.log_dir.as_deref() {
        let file_appender = tracing_appender::rolling::daily(dir, "delivery-server");
        subscriber.with_writer(file_appender).with_ansi(false).init();
        return;
    }

    subscriber.init();
}
