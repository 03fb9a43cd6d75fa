//! Mock driver implementation for testing
//!
//! This module provides in-memory implementations of the driver traits so the
//! element model can be exercised without a browser.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use super::traits::{Application, Locator, RemoteElement, WebDriver};
use crate::Error;

/// Mock remote element
#[derive(Debug)]
pub struct MockRemoteElement {
    id: String,
    displayed: AtomicBool,
    enabled: AtomicBool,
    stale: AtomicBool,
    text: RwLock<String>,
    attributes: RwLock<HashMap<String, String>>,
    sent_keys: RwLock<Vec<String>>,
    scripted_failures: Mutex<VecDeque<Error>>,
    clicks: AtomicUsize,
    action_calls: AtomicUsize,
    displayed_checks: AtomicUsize,
}

impl MockRemoteElement {
    /// Create a displayed, enabled element
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            displayed: AtomicBool::new(true),
            enabled: AtomicBool::new(true),
            stale: AtomicBool::new(false),
            text: RwLock::new(String::new()),
            attributes: RwLock::new(HashMap::new()),
            sent_keys: RwLock::new(Vec::new()),
            scripted_failures: Mutex::new(VecDeque::new()),
            clicks: AtomicUsize::new(0),
            action_calls: AtomicUsize::new(0),
            displayed_checks: AtomicUsize::new(0),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        *self.text.get_mut() = text.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.get_mut().insert(name.into(), value.into());
        self
    }

    pub fn hidden(self) -> Self {
        self.displayed.store(false, Ordering::SeqCst);
        self
    }

    pub fn disabled(self) -> Self {
        self.enabled.store(false, Ordering::SeqCst);
        self
    }

    pub fn set_displayed(&self, displayed: bool) {
        self.displayed.store(displayed, Ordering::SeqCst);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Detach the element from the page; every later call fails as stale
    pub fn make_stale(&self) {
        self.stale.store(true, Ordering::SeqCst);
    }

    pub async fn set_text(&self, text: impl Into<String>) {
        *self.text.write().await = text.into();
    }

    /// Make the next action (click, send keys, text, attribute) fail with `error`
    pub async fn fail_next_action(&self, error: Error) {
        self.scripted_failures.lock().await.push_back(error);
    }

    /// Number of successful clicks
    pub fn clicks(&self) -> usize {
        self.clicks.load(Ordering::SeqCst)
    }

    /// Number of action calls, failed ones included
    pub fn action_calls(&self) -> usize {
        self.action_calls.load(Ordering::SeqCst)
    }

    /// Number of `is_displayed` calls
    pub fn displayed_checks(&self) -> usize {
        self.displayed_checks.load(Ordering::SeqCst)
    }

    pub async fn sent_keys(&self) -> Vec<String> {
        self.sent_keys.read().await.clone()
    }

    fn ensure_attached(&self) -> Result<(), Error> {
        if self.stale.load(Ordering::SeqCst) {
            Err(Error::stale_reference(format!(
                "element {} is no longer attached to the DOM",
                self.id
            )))
        } else {
            Ok(())
        }
    }

    async fn begin_action(&self) -> Result<(), Error> {
        self.action_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_attached()?;
        match self.scripted_failures.lock().await.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for MockRemoteElement {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteElement for MockRemoteElement {
    fn id(&self) -> &str {
        &self.id
    }

    async fn is_displayed(&self) -> Result<bool, Error> {
        self.displayed_checks.fetch_add(1, Ordering::SeqCst);
        self.ensure_attached()?;
        Ok(self.displayed.load(Ordering::SeqCst))
    }

    async fn is_enabled(&self) -> Result<bool, Error> {
        self.ensure_attached()?;
        Ok(self.enabled.load(Ordering::SeqCst))
    }

    async fn click(&self) -> Result<(), Error> {
        self.begin_action().await?;
        self.clicks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<(), Error> {
        self.begin_action().await?;
        self.sent_keys.write().await.push(text.to_string());
        Ok(())
    }

    async fn get_attribute(&self, name: &str) -> Result<Option<String>, Error> {
        self.begin_action().await?;
        Ok(self.attributes.read().await.get(name).cloned())
    }

    async fn text(&self) -> Result<String, Error> {
        self.begin_action().await?;
        Ok(self.text.read().await.clone())
    }
}

/// Mock web driver
#[derive(Debug, Default)]
pub struct MockWebDriver {
    elements: RwLock<HashMap<Locator, Vec<Arc<MockRemoteElement>>>>,
    page_source: RwLock<Option<String>>,
    implicit_waits: Mutex<Vec<Duration>>,
    find_failures: Mutex<VecDeque<Error>>,
    find_calls: AtomicUsize,
}

impl MockWebDriver {
    /// Create a driver with an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the matches of `locator`
    pub async fn add_element(&self, locator: &Locator, element: Arc<MockRemoteElement>) {
        self.elements
            .write()
            .await
            .entry(locator.clone())
            .or_default()
            .push(element);
    }

    /// Replace the matches of `locator`
    pub async fn set_elements(&self, locator: &Locator, elements: Vec<Arc<MockRemoteElement>>) {
        self.elements.write().await.insert(locator.clone(), elements);
    }

    /// Remove every match of `locator`
    pub async fn remove_elements(&self, locator: &Locator) {
        self.elements.write().await.remove(locator);
    }

    /// Page source returned by the driver; `None` makes the call fail
    pub async fn set_page_source(&self, source: Option<String>) {
        *self.page_source.write().await = source;
    }

    /// Make the next lookup fail with `error`
    pub async fn fail_next_find(&self, error: Error) {
        self.find_failures.lock().await.push_back(error);
    }

    /// Number of lookups performed
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Every implicit wait the driver was given, in order
    pub async fn implicit_wait_history(&self) -> Vec<Duration> {
        self.implicit_waits.lock().await.clone()
    }
}

#[async_trait]
impl WebDriver for MockWebDriver {
    async fn find_elements(
        &self,
        locator: &Locator,
    ) -> Result<Vec<Arc<dyn RemoteElement>>, Error> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.find_failures.lock().await.pop_front() {
            return Err(error);
        }

        Ok(self
            .elements
            .read()
            .await
            .get(locator)
            .map(|elements| {
                elements
                    .iter()
                    .map(|e| e.clone() as Arc<dyn RemoteElement>)
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn set_implicit_wait_timeout(&self, timeout: Duration) -> Result<(), Error> {
        self.implicit_waits.lock().await.push(timeout);
        Ok(())
    }

    async fn page_source(&self) -> Result<String, Error> {
        self.page_source
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::driver("page source is not available"))
    }
}

/// Mock application
#[derive(Debug)]
pub struct MockApplication {
    driver: Arc<MockWebDriver>,
    implicit_wait: Mutex<Option<Duration>>,
    started: AtomicBool,
}

impl MockApplication {
    /// Create a started application around `driver`
    pub fn new(driver: Arc<MockWebDriver>) -> Self {
        Self {
            driver,
            implicit_wait: Mutex::new(None),
            started: AtomicBool::new(true),
        }
    }

    /// Concrete driver, for test setup
    pub fn mock_driver(&self) -> Arc<MockWebDriver> {
        self.driver.clone()
    }

    pub fn quit(&self) {
        self.started.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Application for MockApplication {
    fn driver(&self) -> Arc<dyn WebDriver> {
        self.driver.clone()
    }

    fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    async fn set_implicit_wait_timeout(&self, timeout: Duration) -> Result<(), Error> {
        let mut current = self.implicit_wait.lock().await;
        if *current != Some(timeout) {
            self.driver.set_implicit_wait_timeout(timeout).await?;
            *current = Some(timeout);
        }
        Ok(())
    }
}
