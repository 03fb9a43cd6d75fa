//! Localized log messages
//!
//! Messages are addressed by key (`loc.clicking`) and resolved against the
//! table of the language configured in [`LoggerConfiguration`](crate::config::LoggerConfiguration).

pub mod manager;
pub mod logger;

pub use manager::LocalizationManager;
pub use logger::LocalizedLogger;
