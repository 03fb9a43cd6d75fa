//! Element finder module
//!
//! Locates remote elements and filters them by a [`DesiredState`] on the
//! client side, polling until something matches or the timeout elapses.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::state::DesiredState;
use crate::driver::{Locator, RemoteElement};
use crate::localization::LocalizedLogger;
use crate::wait::{ConditionalWait, WaitOptions};
use crate::{Error, ErrorKind, Result};

/// Element finder
#[derive(Debug, Clone)]
pub struct ElementFinder {
    conditional_wait: Arc<ConditionalWait>,
    localized_logger: Arc<LocalizedLogger>,
}

impl ElementFinder {
    /// Create a new element finder
    pub fn new(conditional_wait: Arc<ConditionalWait>, localized_logger: Arc<LocalizedLogger>) -> Self {
        Self {
            conditional_wait,
            localized_logger,
        }
    }

    /// Find the first element in `state`, failing with
    /// [`Error::ElementNotFound`] when the page has none and
    /// [`Error::Timeout`] when none reach the state
    pub async fn find_element(
        &self,
        locator: &Locator,
        state: impl Into<DesiredState>,
        timeout: Option<Duration>,
    ) -> Result<Arc<dyn RemoteElement>> {
        let desired = state
            .into()
            .catching_timeout(false)
            .raising_not_found(true);

        self.find_elements_in_state(locator, desired, timeout)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::element_not_found(format!("No elements found by locator '{}'", locator)))
    }

    /// Find every element in `state`; nothing found is an empty list
    pub async fn find_elements(
        &self,
        locator: &Locator,
        state: impl Into<DesiredState>,
        timeout: Option<Duration>,
    ) -> Result<Vec<Arc<dyn RemoteElement>>> {
        let desired = state
            .into()
            .catching_timeout(true)
            .raising_not_found(false);

        self.find_elements_in_state(locator, desired, timeout).await
    }

    /// Find the elements satisfying `desired`, reacting to a timeout the way
    /// its flags ask for
    #[instrument(skip(self, desired), fields(state = desired.name()))]
    pub async fn find_elements_in_state(
        &self,
        locator: &Locator,
        desired: DesiredState,
        timeout: Option<Duration>,
    ) -> Result<Vec<Arc<dyn RemoteElement>>> {
        let found: Mutex<Vec<Arc<dyn RemoteElement>>> = Mutex::new(Vec::new());
        let found_ref = &found;
        let desired_ref = &desired;

        let options = WaitOptions::new()
            .optional_timeout(timeout)
            .ignoring(&[ErrorKind::StaleReference]);

        let result = self
            .conditional_wait
            .wait_for_with_driver(
                move |driver| async move {
                    let all = driver.find_elements(locator).await?;
                    *found_ref.lock().await = all.clone();

                    let mut matching = Vec::with_capacity(all.len());
                    for element in all {
                        if desired_ref.is_satisfied_by(element.clone()).await? {
                            matching.push(element);
                        }
                    }
                    Ok((!matching.is_empty()).then_some(matching))
                },
                options,
            )
            .await;

        match result {
            Ok(elements) => {
                debug!("Found {} element(s) by locator '{}'", elements.len(), locator);
                Ok(elements)
            }
            Err(Error::Timeout(message)) => {
                let any_found = !found.lock().await.is_empty();
                self.handle_timeout(&message, locator, &desired, any_found)
            }
            Err(e) => Err(e),
        }
    }

    fn handle_timeout(
        &self,
        timeout_message: &str,
        locator: &Locator,
        desired: &DesiredState,
        any_found: bool,
    ) -> Result<Vec<Arc<dyn RemoteElement>>> {
        let locator_text = locator.to_string();
        let message = format!(
            "No elements with locator '{}' were found in {} state",
            locator_text,
            desired.name()
        );

        if desired.catch_timeout() {
            if any_found {
                self.localized_logger.debug(
                    "loc.elements.were.found.but.not.in.state",
                    &[&locator_text, desired.name()],
                );
            } else if desired.raise_not_found() {
                return Err(Error::element_not_found(message));
            } else {
                self.localized_logger
                    .debug("loc.no.elements.found.by.locator", &[&locator_text]);
            }
            return Ok(Vec::new());
        }

        let combined = format!("{}: {}", timeout_message, message);
        if desired.raise_not_found() && !any_found {
            Err(Error::element_not_found(combined))
        } else {
            Err(Error::timeout(combined))
        }
    }
}
