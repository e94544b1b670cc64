use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber
///
/// The level is read from `LOGLEVEL` (`DEBUG`, `INFO`, `WARN`, `ERROR`, `TRACE`),
/// defaulting to `INFO`. Calling it more than once is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            "TRACE" => Level::TRACE,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}
