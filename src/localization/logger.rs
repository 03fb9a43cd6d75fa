//! Logger that speaks message keys

use crate::localization::LocalizationManager;
use crate::logging::Logger;
use std::sync::Arc;

/// Logs localized messages through the shared [`Logger`]
#[derive(Debug, Clone)]
pub struct LocalizedLogger {
    localization: Arc<LocalizationManager>,
    logger: Arc<Logger>,
}

impl LocalizedLogger {
    /// Create a new localized logger
    pub fn new(localization: Arc<LocalizationManager>, logger: Arc<Logger>) -> Self {
        Self {
            localization,
            logger,
        }
    }

    pub fn localization(&self) -> &LocalizationManager {
        &self.localization
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Log an action performed on an element: `Button 'Submit' :: Clicking`
    pub fn info_element_action(&self, element_type: &str, name: &str, key: &str, args: &[&str]) {
        let message = self.localization.get_localized_message(key, args);
        self.logger
            .info(&format!("{} '{}' :: {}", element_type, name, message));
    }

    pub fn info(&self, key: &str, args: &[&str]) {
        self.logger.info(&self.localize(key, args));
    }

    pub fn debug(&self, key: &str, args: &[&str]) {
        self.logger.debug(&self.localize(key, args));
    }

    pub fn warn(&self, key: &str, args: &[&str]) {
        self.logger.warn(&self.localize(key, args));
    }

    pub fn error(&self, key: &str, args: &[&str]) {
        self.logger.error(&self.localize(key, args));
    }

    pub fn fatal(&self, key: &str, args: &[&str], error: &crate::Error) {
        self.logger.fatal(&self.localize(key, args), error);
    }

    fn localize(&self, key: &str, args: &[&str]) -> String {
        self.localization.get_localized_message(key, args)
    }
}
