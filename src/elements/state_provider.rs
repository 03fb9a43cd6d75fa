//! Element state queries and waits
//!
//! [`ElementStateProvider`] asks the driver again on every call.
//! [`CachedElementStateProvider`] answers from the handle kept by an
//! [`ElementCacheHandler`]. A stale handle is found again on the next query,
//! so a re-rendered element is seen through the same provider.

use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::cache::ElementCacheHandler;
use super::finder::ElementFinder;
use super::state::{is_element_enabled, DesiredState, ElementState};
use crate::driver::{Locator, RemoteElement};
use crate::localization::LocalizedLogger;
use crate::wait::{ConditionalWait, WaitOptions};
use crate::{Error, ErrorKind, Result};

/// State checks of a single element
///
/// The `is_*` queries never wait. The `wait_for_*` variants wait up to
/// `timeout`, or the configured condition timeout for `None`, and report
/// whether the state was reached.
#[async_trait]
pub trait StateProvider: Send + Sync + fmt::Debug {
    async fn is_displayed(&self) -> Result<bool>;

    async fn is_exist(&self) -> Result<bool>;

    async fn is_enabled(&self) -> Result<bool>;

    async fn is_clickable(&self) -> Result<bool>;

    async fn wait_for_displayed(&self, timeout: Option<Duration>) -> Result<bool>;

    async fn wait_for_not_displayed(&self, timeout: Option<Duration>) -> Result<bool>;

    async fn wait_for_exist(&self, timeout: Option<Duration>) -> Result<bool>;

    async fn wait_for_not_exist(&self, timeout: Option<Duration>) -> Result<bool>;

    async fn wait_for_enabled(&self, timeout: Option<Duration>) -> Result<bool>;

    async fn wait_for_not_enabled(&self, timeout: Option<Duration>) -> Result<bool>;

    /// Wait until the element is clickable, failing with
    /// [`Error::Timeout`] when it does not become so in time
    async fn wait_for_clickable(&self, timeout: Option<Duration>) -> Result<()>;
}

/// State provider that looks the element up on every call
#[derive(Debug, Clone)]
pub struct ElementStateProvider {
    locator: Locator,
    finder: Arc<ElementFinder>,
    conditional_wait: Arc<ConditionalWait>,
}

impl ElementStateProvider {
    pub fn new(locator: Locator, finder: Arc<ElementFinder>, conditional_wait: Arc<ConditionalWait>) -> Self {
        Self {
            locator,
            finder,
            conditional_wait,
        }
    }

    async fn is_any_element_found(&self, timeout: Option<Duration>, state: ElementState) -> Result<bool> {
        Ok(!self
            .finder
            .find_elements(&self.locator, state, timeout)
            .await?
            .is_empty())
    }

    async fn is_in_desired_state(&self, timeout: Option<Duration>, desired: DesiredState) -> Result<bool> {
        Ok(!self
            .finder
            .find_elements_in_state(&self.locator, desired, timeout)
            .await?
            .is_empty())
    }
}

#[async_trait]
impl StateProvider for ElementStateProvider {
    async fn is_displayed(&self) -> Result<bool> {
        self.wait_for_displayed(Some(Duration::ZERO)).await
    }

    async fn is_exist(&self) -> Result<bool> {
        self.wait_for_exist(Some(Duration::ZERO)).await
    }

    async fn is_enabled(&self) -> Result<bool> {
        self.wait_for_enabled(Some(Duration::ZERO)).await
    }

    async fn is_clickable(&self) -> Result<bool> {
        self.is_in_desired_state(Some(Duration::ZERO), DesiredState::clickable().catching_timeout(true))
            .await
    }

    async fn wait_for_displayed(&self, timeout: Option<Duration>) -> Result<bool> {
        self.is_any_element_found(timeout, ElementState::Displayed).await
    }

    async fn wait_for_not_displayed(&self, timeout: Option<Duration>) -> Result<bool> {
        self.conditional_wait
            .wait_for(
                move || async move { Ok(!self.is_displayed().await?) },
                WaitOptions::new().optional_timeout(timeout),
            )
            .await
    }

    async fn wait_for_exist(&self, timeout: Option<Duration>) -> Result<bool> {
        self.is_any_element_found(timeout, ElementState::ExistsInAnyState).await
    }

    async fn wait_for_not_exist(&self, timeout: Option<Duration>) -> Result<bool> {
        self.conditional_wait
            .wait_for(
                move || async move { Ok(!self.is_exist().await?) },
                WaitOptions::new().optional_timeout(timeout),
            )
            .await
    }

    async fn wait_for_enabled(&self, timeout: Option<Duration>) -> Result<bool> {
        let desired = DesiredState::enabled()
            .catching_timeout(true)
            .raising_not_found(true);
        self.is_in_desired_state(timeout, desired).await
    }

    async fn wait_for_not_enabled(&self, timeout: Option<Duration>) -> Result<bool> {
        let desired = DesiredState::not_enabled()
            .catching_timeout(true)
            .raising_not_found(true);
        self.is_in_desired_state(timeout, desired).await
    }

    async fn wait_for_clickable(&self, timeout: Option<Duration>) -> Result<()> {
        let desired = DesiredState::clickable()
            .catching_timeout(true)
            .raising_not_found(true);
        if self.is_in_desired_state(timeout, desired).await? {
            Ok(())
        } else {
            Err(Error::timeout(format!(
                "Element found by locator '{}' was not clickable",
                self.locator
            )))
        }
    }
}

/// Failures the cached queries read as "no"
const CACHED_QUERY_TOLERATED: &[ErrorKind] = &[ErrorKind::StaleReference, ErrorKind::NotFound];

/// State provider backed by the element cache
#[derive(Debug)]
pub struct CachedElementStateProvider {
    locator: Locator,
    cache: Arc<ElementCacheHandler>,
    conditional_wait: Arc<ConditionalWait>,
    localized_logger: Arc<LocalizedLogger>,
}

impl CachedElementStateProvider {
    pub fn new(
        locator: Locator,
        cache: Arc<ElementCacheHandler>,
        conditional_wait: Arc<ConditionalWait>,
        localized_logger: Arc<LocalizedLogger>,
    ) -> Self {
        Self {
            locator,
            cache,
            conditional_wait,
            localized_logger,
        }
    }

    /// Run `query` against the cached element, reading `tolerated` failures
    /// as `false`
    async fn try_invoke<F, Fut>(&self, query: F, tolerated: &[ErrorKind]) -> Result<bool>
    where
        F: FnOnce(Arc<dyn RemoteElement>) -> Fut + Send,
        Fut: Future<Output = Result<bool>> + Send,
    {
        let result = match self
            .cache
            .get_element(Some(Duration::ZERO), Some(ElementState::ExistsInAnyState))
            .await
        {
            Ok(element) => query(element).await,
            Err(e) => Err(e),
        };

        match result {
            Err(e) if e.is_any_of(tolerated) => Ok(false),
            other => other,
        }
    }

    async fn wait_for_condition<F, Fut>(
        &self,
        condition: F,
        state_name: &str,
        timeout: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<bool>> + Send,
    {
        let reached = self
            .conditional_wait
            .wait_for(condition, WaitOptions::new().optional_timeout(timeout))
            .await?;

        if !reached {
            let timeout = timeout.unwrap_or(self.conditional_wait.timeouts().condition);
            self.localized_logger.warn(
                "loc.wait.for.state.timeout",
                &[state_name, &format!("{:?}", timeout)],
            );
        }
        Ok(reached)
    }
}

#[async_trait]
impl StateProvider for CachedElementStateProvider {
    async fn is_displayed(&self) -> Result<bool> {
        self.try_invoke(
            |element| async move { element.is_displayed().await },
            CACHED_QUERY_TOLERATED,
        )
        .await
    }

    async fn is_exist(&self) -> Result<bool> {
        self.try_invoke(|_| async { Ok(true) }, CACHED_QUERY_TOLERATED)
            .await
    }

    async fn is_enabled(&self) -> Result<bool> {
        self.try_invoke(
            |element| async move { is_element_enabled(&*element).await },
            &[ErrorKind::StaleReference],
        )
        .await
    }

    async fn is_clickable(&self) -> Result<bool> {
        self.try_invoke(
            |element| async move { Ok(element.is_displayed().await? && element.is_enabled().await?) },
            CACHED_QUERY_TOLERATED,
        )
        .await
    }

    async fn wait_for_displayed(&self, timeout: Option<Duration>) -> Result<bool> {
        self.wait_for_condition(move || self.is_displayed(), "displayed", timeout)
            .await
    }

    async fn wait_for_not_displayed(&self, timeout: Option<Duration>) -> Result<bool> {
        self.wait_for_condition(
            move || async move { Ok(!self.is_displayed().await?) },
            "not displayed",
            timeout,
        )
        .await
    }

    async fn wait_for_exist(&self, timeout: Option<Duration>) -> Result<bool> {
        self.wait_for_condition(move || self.is_exist(), "exist", timeout)
            .await
    }

    async fn wait_for_not_exist(&self, timeout: Option<Duration>) -> Result<bool> {
        self.wait_for_condition(
            move || async move { Ok(!self.is_exist().await?) },
            "not exist",
            timeout,
        )
        .await
    }

    async fn wait_for_enabled(&self, timeout: Option<Duration>) -> Result<bool> {
        self.wait_for_condition(move || self.is_enabled(), "enabled", timeout)
            .await
    }

    async fn wait_for_not_enabled(&self, timeout: Option<Duration>) -> Result<bool> {
        self.wait_for_condition(
            move || async move { Ok(!self.is_enabled().await?) },
            "not enabled",
            timeout,
        )
        .await
    }

    async fn wait_for_clickable(&self, timeout: Option<Duration>) -> Result<()> {
        let options = WaitOptions::new()
            .optional_timeout(timeout)
            .message(format!("Element found by locator '{}' was not clickable", self.locator));
        self.conditional_wait
            .wait_for_true(move || self.is_clickable(), options)
            .await
    }
}
