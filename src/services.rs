//! Service wiring
//!
//! [`CoreServices`] is created once per application. It loads every
//! configuration from the settings file a single time and owns the shared
//! logger, waits, retriers and finder that elements are built from.

use std::sync::Arc;

use tracing::info;

use crate::config::{
    ElementCacheConfiguration, JsonSettingsFile, LoggerConfiguration, RetryConfiguration,
    TimeoutConfiguration,
};
use crate::driver::Application;
use crate::elements::{ElementFactory, ElementFinder};
use crate::localization::{LocalizationManager, LocalizedLogger};
use crate::logging::Logger;
use crate::retry::{ActionRetrier, ElementActionRetrier};
use crate::wait::ConditionalWait;
use crate::Result;

/// Services every element needs
#[derive(Debug, Clone)]
pub struct ElementServices {
    pub application: Arc<dyn Application>,
    pub conditional_wait: Arc<ConditionalWait>,
    pub finder: Arc<ElementFinder>,
    pub retrier: Arc<ElementActionRetrier>,
    pub localized_logger: Arc<LocalizedLogger>,
    pub cache_configuration: ElementCacheConfiguration,
    pub logger_configuration: Arc<LoggerConfiguration>,
}

/// Application-lifetime service root
#[derive(Debug, Clone)]
pub struct CoreServices {
    settings: Arc<JsonSettingsFile>,
    timeout_configuration: TimeoutConfiguration,
    retry_configuration: RetryConfiguration,
    logger_configuration: Arc<LoggerConfiguration>,
    element_cache_configuration: ElementCacheConfiguration,
    logger: Arc<Logger>,
    localized_logger: Arc<LocalizedLogger>,
    application: Arc<dyn Application>,
    conditional_wait: Arc<ConditionalWait>,
    action_retrier: Arc<ActionRetrier>,
    element_action_retrier: Arc<ElementActionRetrier>,
    element_finder: Arc<ElementFinder>,
}

impl CoreServices {
    /// Load the configurations from `settings` and wire the services around
    /// `application`
    pub fn new(settings: JsonSettingsFile, application: Arc<dyn Application>) -> Result<Self> {
        let timeout_configuration = TimeoutConfiguration::from_settings(&settings)?;
        let retry_configuration = RetryConfiguration::from_settings(&settings)?;
        let logger_configuration = Arc::new(LoggerConfiguration::from_settings(&settings)?);
        let element_cache_configuration = ElementCacheConfiguration::from_settings(&settings)?;

        let logger = Arc::new(Logger::new());
        let localization = Arc::new(LocalizationManager::new(&logger_configuration)?);
        let localized_logger = Arc::new(LocalizedLogger::new(localization, logger.clone()));

        let conditional_wait = Arc::new(ConditionalWait::new(
            application.clone(),
            timeout_configuration,
        ));
        let action_retrier = Arc::new(ActionRetrier::new(retry_configuration));
        let element_action_retrier = Arc::new(ElementActionRetrier::new(retry_configuration));
        let element_finder = Arc::new(ElementFinder::new(
            conditional_wait.clone(),
            localized_logger.clone(),
        ));

        info!(
            "Core services created from '{}' (language: {}, element cache: {})",
            settings.source(),
            logger_configuration.language,
            element_cache_configuration.enabled
        );

        Ok(Self {
            settings: Arc::new(settings),
            timeout_configuration,
            retry_configuration,
            logger_configuration,
            element_cache_configuration,
            logger,
            localized_logger,
            application,
            conditional_wait,
            action_retrier,
            element_action_retrier,
            element_finder,
        })
    }

    pub fn settings(&self) -> &JsonSettingsFile {
        &self.settings
    }

    pub fn timeout_configuration(&self) -> &TimeoutConfiguration {
        &self.timeout_configuration
    }

    pub fn retry_configuration(&self) -> &RetryConfiguration {
        &self.retry_configuration
    }

    pub fn logger_configuration(&self) -> &LoggerConfiguration {
        &self.logger_configuration
    }

    pub fn element_cache_configuration(&self) -> &ElementCacheConfiguration {
        &self.element_cache_configuration
    }

    pub fn logger(&self) -> Arc<Logger> {
        self.logger.clone()
    }

    pub fn localized_logger(&self) -> Arc<LocalizedLogger> {
        self.localized_logger.clone()
    }

    pub fn application(&self) -> Arc<dyn Application> {
        self.application.clone()
    }

    pub fn conditional_wait(&self) -> Arc<ConditionalWait> {
        self.conditional_wait.clone()
    }

    pub fn action_retrier(&self) -> Arc<ActionRetrier> {
        self.action_retrier.clone()
    }

    pub fn element_action_retrier(&self) -> Arc<ElementActionRetrier> {
        self.element_action_retrier.clone()
    }

    pub fn element_finder(&self) -> Arc<ElementFinder> {
        self.element_finder.clone()
    }

    /// Bundle handed to every element
    pub fn element_services(&self) -> ElementServices {
        ElementServices {
            application: self.application.clone(),
            conditional_wait: self.conditional_wait.clone(),
            finder: self.element_finder.clone(),
            retrier: self.element_action_retrier.clone(),
            localized_logger: self.localized_logger.clone(),
            cache_configuration: self.element_cache_configuration,
            logger_configuration: self.logger_configuration.clone(),
        }
    }

    pub fn element_factory(&self) -> ElementFactory {
        ElementFactory::new(self.element_services())
    }
}
