//! Logger settings

use crate::config::JsonSettingsFile;
use crate::Result;

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfiguration {
    /// Language of log messages
    pub language: String,
    /// Dump the page source when an element cannot be found
    pub log_page_source: bool,
}

impl Default for LoggerConfiguration {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            log_page_source: true,
        }
    }
}

impl LoggerConfiguration {
    /// Load logger settings
    pub fn from_settings(settings: &JsonSettingsFile) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            language: settings.get_value_or_default("logger.language", defaults.language)?,
            log_page_source: settings
                .get_value_or_default("logger.logPageSource", defaults.log_page_source)?,
        })
    }
}
