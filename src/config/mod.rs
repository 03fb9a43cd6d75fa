//! Configuration management for Chaser-Elements
//!
//! Every configuration is read once from a [`JsonSettingsFile`] when the
//! services are created and stays immutable afterwards.
//!
//! ## Settings layout
//! ```json
//! {
//!   "timeouts": { "timeoutImplicit": 0, "timeoutCondition": 30, "timeoutPollingInterval": 300, "timeoutCommand": 60 },
//!   "retry": { "number": 2, "pollingInterval": 300 },
//!   "logger": { "language": "en", "logPageSource": true },
//!   "elementCache": { "isEnabled": false }
//! }
//! ```
//! Timeouts are in seconds, polling intervals in milliseconds.

pub mod settings;
pub mod timeouts;
pub mod retry;
pub mod logger;
pub mod element_cache;


pub use settings::JsonSettingsFile;
pub use timeouts::TimeoutConfiguration;
pub use retry::RetryConfiguration;
pub use logger::LoggerConfiguration;
pub use element_cache::ElementCacheConfiguration;
