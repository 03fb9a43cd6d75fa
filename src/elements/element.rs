//! Base element

use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;

use super::cache::ElementCacheHandler;
use super::factory::ElementFactory;
use super::state::{ElementState, ElementsCount};
use super::state_provider::{CachedElementStateProvider, ElementStateProvider, StateProvider};
use crate::driver::{Locator, RemoteElement};
use crate::services::ElementServices;
use crate::{Error, Result};

/// A named UI element found by a locator
///
/// The remote handle is looked up on demand for every action. With the
/// element cache enabled, the handle found first is reused until it goes stale.
#[derive(Debug)]
pub struct Element {
    locator: Locator,
    name: String,
    element_type: String,
    state: ElementState,
    services: ElementServices,
    cache: Arc<ElementCacheHandler>,
    state_provider: Arc<dyn StateProvider>,
}

impl Element {
    /// Create a new element
    pub fn new(
        locator: Locator,
        name: impl Into<String>,
        element_type: impl Into<String>,
        state: ElementState,
        services: ElementServices,
    ) -> Self {
        let cache = Arc::new(ElementCacheHandler::new(
            locator.clone(),
            state,
            services.finder.clone(),
            services.localized_logger.clone(),
        ));

        let state_provider: Arc<dyn StateProvider> = if services.cache_configuration.enabled {
            Arc::new(CachedElementStateProvider::new(
                locator.clone(),
                cache.clone(),
                services.conditional_wait.clone(),
                services.localized_logger.clone(),
            ))
        } else {
            Arc::new(ElementStateProvider::new(
                locator.clone(),
                services.finder.clone(),
                services.conditional_wait.clone(),
            ))
        };

        Self {
            locator,
            name: name.into(),
            element_type: element_type.into(),
            state,
            services,
            cache,
            state_provider,
        }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    pub fn element_state(&self) -> ElementState {
        self.state
    }

    /// State queries and waits
    pub fn state(&self) -> &dyn StateProvider {
        self.state_provider.as_ref()
    }

    pub fn cache(&self) -> &ElementCacheHandler {
        &self.cache
    }

    /// Resolve the remote element, waiting up to `timeout`.
    ///
    /// When nothing is found the page source may be logged before the
    /// [`Error::ElementNotFound`] is returned.
    #[instrument(skip(self), fields(element = %self.name))]
    pub async fn get_element(&self, timeout: Option<Duration>) -> Result<Arc<dyn RemoteElement>> {
        let result = if self.services.cache_configuration.enabled {
            self.cache.get_element(timeout, None).await
        } else {
            self.services
                .finder
                .find_element(&self.locator, self.state, timeout)
                .await
        };

        if let Err(Error::ElementNotFound(_)) = &result {
            if self.services.logger_configuration.log_page_source {
                self.log_page_source().await;
            }
        }
        result
    }

    pub async fn click(&self) -> Result<()> {
        self.log_element_action("loc.clicking", &[]);
        self.services
            .retrier
            .do_with_retry(move || async move {
                let element = self.get_element(None).await?;
                element.click().await
            })
            .await
    }

    pub async fn send_keys(&self, text: &str) -> Result<()> {
        self.log_element_action("loc.text.sending.keys", &[text]);
        self.services
            .retrier
            .do_with_retry(move || async move {
                let element = self.get_element(None).await?;
                element.send_keys(text).await
            })
            .await
    }

    /// Attribute value; a missing attribute is `None`
    pub async fn get_attribute(&self, attribute: &str) -> Result<Option<String>> {
        self.log_element_action("loc.el.getattr", &[attribute]);
        let value = self
            .services
            .retrier
            .do_with_retry(move || async move {
                let element = self.get_element(None).await?;
                element.get_attribute(attribute).await
            })
            .await?;

        self.log_element_action(
            "loc.el.attr.value",
            &[attribute, value.as_deref().unwrap_or_default()],
        );
        Ok(value)
    }

    pub async fn text(&self) -> Result<String> {
        self.log_element_action("loc.get.text", &[]);
        let text = self
            .services
            .retrier
            .do_with_retry(move || async move {
                let element = self.get_element(None).await?;
                element.text().await
            })
            .await?;

        self.log_element_action("loc.text.value", &[&text]);
        Ok(text)
    }

    /// Child of kind `T` located by `child_locator` inside this element
    pub fn find_child_element<T, F>(
        &self,
        child_locator: &Locator,
        name: &str,
        supplier: F,
        state: ElementState,
    ) -> Result<T>
    where
        F: FnOnce(Locator, String, ElementState, ElementServices) -> T,
    {
        self.factory()
            .find_child_element(self, child_locator, name, supplier, state)
    }

    /// Children of kind `T` located by `child_locator` inside this element,
    /// once their number matches `expected`
    pub async fn find_child_elements<T, F>(
        &self,
        child_locator: &Locator,
        name: &str,
        supplier: F,
        expected: ElementsCount,
        state: ElementState,
        timeout: Option<Duration>,
    ) -> Result<Vec<T>>
    where
        F: Fn(Locator, String, ElementState, ElementServices) -> T,
    {
        self.factory()
            .find_child_elements(self, child_locator, name, supplier, expected, state, timeout)
            .await
    }

    fn factory(&self) -> ElementFactory {
        ElementFactory::new(self.services.clone())
    }

    fn log_element_action(&self, key: &str, args: &[&str]) {
        self.services
            .localized_logger
            .info_element_action(&self.element_type, &self.name, key, args);
    }

    async fn log_page_source(&self) {
        match self.services.application.driver().page_source().await {
            Ok(source) => self
                .services
                .localized_logger
                .debug("loc.page.source", &[&source]),
            Err(e) => self
                .services
                .localized_logger
                .fatal("loc.get.page.source.failed", &[], &e),
        }
    }
}
