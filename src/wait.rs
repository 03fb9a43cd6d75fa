//! Conditional waits
//!
//! A condition is polled until it holds or the timeout elapses. The condition
//! is always checked before sleeping, so it runs at least once even with a
//! zero timeout, and the last check happens at the deadline.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::TimeoutConfiguration;
use crate::driver::{Application, WebDriver};
use crate::{Error, ErrorKind, Result};

/// Per-call wait parameters; unset values come from [`TimeoutConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct WaitOptions {
    pub timeout: Option<Duration>,
    pub polling_interval: Option<Duration>,
    pub message: String,
    pub ignored: Vec<ErrorKind>,
}

impl WaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout, keeping the configured default for `None`
    pub fn optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn polling_interval(mut self, interval: Duration) -> Self {
        self.polling_interval = Some(interval);
        self
    }

    /// Part of the timeout error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Failures treated as "condition not met yet"
    pub fn ignoring(mut self, kinds: &[ErrorKind]) -> Self {
        self.ignored.extend_from_slice(kinds);
        self
    }
}

/// Waits for conditions to hold
#[derive(Debug, Clone)]
pub struct ConditionalWait {
    application: Arc<dyn Application>,
    timeouts: TimeoutConfiguration,
}

impl ConditionalWait {
    /// Create a new conditional wait
    pub fn new(application: Arc<dyn Application>, timeouts: TimeoutConfiguration) -> Self {
        Self {
            application,
            timeouts,
        }
    }

    pub fn timeouts(&self) -> &TimeoutConfiguration {
        &self.timeouts
    }

    /// Wait until `condition` returns `true`, failing with
    /// [`Error::Timeout`] when it does not in time
    pub async fn wait_for_true<F, Fut>(&self, mut condition: F, options: WaitOptions) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        self.poll(
            move || {
                let check = condition();
                async move { Ok(check.await?.then_some(())) }
            },
            &options,
        )
        .await
    }

    /// Wait until `condition` returns `true`; a timeout yields `false`
    pub async fn wait_for<F, Fut>(&self, condition: F, options: WaitOptions) -> Result<bool>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        match self.wait_for_true(condition, options).await {
            Ok(()) => Ok(true),
            Err(Error::Timeout(message)) => {
                debug!("{}", message);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Poll `condition` against the driver until it yields a value.
    ///
    /// The driver's implicit wait is switched off while polling and restored
    /// to the configured value afterwards, whatever the outcome. A wait that
    /// is dropped before it completes restores it in the background.
    pub async fn wait_for_with_driver<T, F, Fut>(&self, mut condition: F, options: WaitOptions) -> Result<T>
    where
        F: FnMut(Arc<dyn WebDriver>) -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        self.application
            .set_implicit_wait_timeout(Duration::ZERO)
            .await?;
        let guard = ImplicitWaitGuard::new(self.application.clone(), self.timeouts.implicit);

        let driver = self.application.driver();
        let result = self.poll(|| condition(driver.clone()), &options).await;

        let restored = guard.restore().await;

        match (result, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(restore_error)) => Err(restore_error),
            (Err(e), Err(restore_error)) => {
                warn!("Failed to restore implicit wait: {}", restore_error);
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
        }
    }

    async fn poll<T, F, Fut>(&self, mut condition: F, options: &WaitOptions) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let timeout = options.timeout.unwrap_or(self.timeouts.condition);
        let interval = options
            .polling_interval
            .unwrap_or(self.timeouts.polling_interval);
        let start = Instant::now();

        loop {
            match condition().await {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => {}
                Err(e) if e.is_any_of(&options.ignored) => {
                    debug!("Ignoring '{}' while waiting for condition", e);
                }
                Err(e) => return Err(e),
            }

            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Err(Error::timeout(format!(
                    "Timed out after {:?} during wait for condition '{}'",
                    timeout, options.message
                )));
            }

            tokio::time::sleep(interval.min(timeout - elapsed)).await;
        }
    }
}

/// Puts the implicit wait back when dropped without [`Self::restore`]
struct ImplicitWaitGuard {
    application: Arc<dyn Application>,
    implicit: Duration,
    armed: bool,
}

impl ImplicitWaitGuard {
    fn new(application: Arc<dyn Application>, implicit: Duration) -> Self {
        Self {
            application,
            implicit,
            armed: true,
        }
    }

    async fn restore(mut self) -> Result<()> {
        let restored = self
            .application
            .set_implicit_wait_timeout(self.implicit)
            .await;
        self.armed = false;
        restored
    }
}

impl Drop for ImplicitWaitGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let application = self.application.clone();
        let implicit = self.implicit;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = application.set_implicit_wait_timeout(implicit).await {
                        warn!("Failed to restore implicit wait: {}", e);
                    }
                });
            }
            Err(_) => warn!("No runtime left to restore implicit wait of {:?}", implicit),
        }
    }
}
