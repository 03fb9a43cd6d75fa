//! Timeouts used by waits and the driver

use crate::config::JsonSettingsFile;
use crate::Result;
use std::time::Duration;

/// Timeout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfiguration {
    /// Driver-level implicit wait
    pub implicit: Duration,
    /// Default timeout of conditional waits
    pub condition: Duration,
    /// Default polling interval of conditional waits
    pub polling_interval: Duration,
    /// Driver command timeout
    pub command: Duration,
}

impl Default for TimeoutConfiguration {
    fn default() -> Self {
        Self {
            implicit: Duration::ZERO,
            condition: Duration::from_secs(30),
            polling_interval: Duration::from_millis(300),
            command: Duration::from_secs(60),
        }
    }
}

impl TimeoutConfiguration {
    /// Load timeouts from settings
    pub fn from_settings(settings: &JsonSettingsFile) -> Result<Self> {
        Ok(Self {
            implicit: Duration::from_secs(settings.get_value("timeouts.timeoutImplicit")?),
            condition: Duration::from_secs(settings.get_value("timeouts.timeoutCondition")?),
            polling_interval: Duration::from_millis(
                settings.get_value("timeouts.timeoutPollingInterval")?,
            ),
            command: Duration::from_secs(settings.get_value("timeouts.timeoutCommand")?),
        })
    }
}
