//! Retry policy

use crate::config::JsonSettingsFile;
use crate::Result;
use std::time::Duration;

/// Retry settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfiguration {
    /// How many times a failed action is retried
    pub number: u32,
    /// Pause between attempts
    pub polling_interval: Duration,
}

impl Default for RetryConfiguration {
    fn default() -> Self {
        Self {
            number: 2,
            polling_interval: Duration::from_millis(300),
        }
    }
}

impl RetryConfiguration {
    /// Load the retry policy from settings
    pub fn from_settings(settings: &JsonSettingsFile) -> Result<Self> {
        Ok(Self {
            number: settings.get_value("retry.number")?,
            polling_interval: Duration::from_millis(settings.get_value("retry.pollingInterval")?),
        })
    }
}
