//! Logging for Chaser-Elements
//!
//! [`Logger`] is created once per application and shared by `Arc`. It emits
//! `tracing` events under the [`LOG_TARGET`] target; whichever subscriber the
//! host installs decides where they end up. [`init_logging`] installs a
//! reasonable default for test runs.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Target of every event emitted through [`Logger`]
pub const LOG_TARGET: &str = "chaser_elements";

/// Leveled logger
#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    /// Create a new logger
    pub fn new() -> Self {
        Self
    }

    pub fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!(target: LOG_TARGET, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{}", message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!(target: LOG_TARGET, "{}", message);
    }

    /// Log an unrecoverable failure together with its cause
    pub fn fatal(&self, message: &str, error: &crate::Error) {
        tracing::error!(target: LOG_TARGET, error = %error, fatal = true, "{}", message);
    }
}

/// Install a fmt subscriber honouring `RUST_LOG`, falling back to `level`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
