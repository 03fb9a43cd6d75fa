//! Cached remote element handle

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::finder::ElementFinder;
use super::state::ElementState;
use crate::driver::{Locator, RemoteElement};
use crate::localization::LocalizedLogger;
use crate::{Error, Result};

/// Keeps the remote element found for one locator and looks it up again
/// only once the handle goes stale or stops matching its state
#[derive(Debug)]
pub struct ElementCacheHandler {
    locator: Locator,
    state: ElementState,
    finder: Arc<ElementFinder>,
    localized_logger: Arc<LocalizedLogger>,
    remote_element: RwLock<Option<Arc<dyn RemoteElement>>>,
}

impl ElementCacheHandler {
    pub fn new(
        locator: Locator,
        state: ElementState,
        finder: Arc<ElementFinder>,
        localized_logger: Arc<LocalizedLogger>,
    ) -> Self {
        Self {
            locator,
            state,
            finder,
            localized_logger,
            remote_element: RwLock::new(None),
        }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// A handle was cached and can no longer be used as is
    pub async fn is_stale(&self) -> Result<bool> {
        let cached = self.remote_element.read().await.clone();
        match cached {
            Some(element) => self.refresh_needed_for(&*element, None).await,
            None => Ok(false),
        }
    }

    pub async fn is_refresh_needed(&self, custom_state: Option<ElementState>) -> Result<bool> {
        let cached = self.remote_element.read().await.clone();
        match cached {
            Some(element) => self.refresh_needed_for(&*element, custom_state).await,
            None => Ok(true),
        }
    }

    /// Cached handle, found again first if it needs a refresh
    pub async fn get_element(
        &self,
        timeout: Option<Duration>,
        custom_state: Option<ElementState>,
    ) -> Result<Arc<dyn RemoteElement>> {
        let cached = self.remote_element.read().await.clone();
        if let Some(element) = cached {
            if !self.refresh_needed_for(&*element, custom_state).await? {
                return Ok(element);
            }
            self.localized_logger
                .debug("loc.cache.refresh", &[&self.locator.to_string()]);
        }

        let element = self
            .finder
            .find_element(&self.locator, self.resolve_state(custom_state), timeout)
            .await?;
        *self.remote_element.write().await = Some(element.clone());
        Ok(element)
    }

    async fn refresh_needed_for(
        &self,
        element: &dyn RemoteElement,
        custom_state: Option<ElementState>,
    ) -> Result<bool> {
        let displayed = match element.is_displayed().await {
            Ok(displayed) => displayed,
            Err(Error::StaleReference(_)) => return Ok(true),
            Err(e) => return Err(e),
        };
        Ok(self.resolve_state(custom_state) == ElementState::Displayed && !displayed)
    }

    fn resolve_state(&self, custom_state: Option<ElementState>) -> ElementState {
        custom_state.unwrap_or(self.state)
    }
}
