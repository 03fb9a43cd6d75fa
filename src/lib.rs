//! Chaser-Elements: element model for browser automation
//!
//! This library locates UI elements through a pluggable driver boundary,
//! waits for them to reach a state, caches their handles and retries flaky
//! actions, logging every step in the configured language.

pub mod error;
pub mod config;
pub mod logging;
pub mod localization;

pub mod driver;
pub mod retry;
pub mod wait;
pub mod elements;
pub mod services;

// Re-exports
pub use error::{Error, ErrorKind, Result};
pub use services::{CoreServices, ElementServices};

/// Chaser-Elements library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
