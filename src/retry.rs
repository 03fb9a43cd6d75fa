//! Retrying of flaky actions
//!
//! [`ActionRetrier`] re-runs an operation while it fails with one of the
//! handled error kinds, pausing between attempts. [`ElementActionRetrier`]
//! does the same with the failures typical of element interactions handled
//! by default.

use std::future::Future;

use tracing::debug;

use crate::config::RetryConfiguration;
use crate::{ErrorKind, Result};

/// Failures an element action is retried on unless told otherwise
pub const ELEMENT_HANDLED_ERRORS: &[ErrorKind] =
    &[ErrorKind::StaleReference, ErrorKind::InvalidElementState];

/// Bounded retry executor
#[derive(Debug, Clone)]
pub struct ActionRetrier {
    configuration: RetryConfiguration,
}

impl ActionRetrier {
    /// Create a new retrier
    pub fn new(configuration: RetryConfiguration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &RetryConfiguration {
        &self.configuration
    }

    /// Run `operation`, retrying it up to `retry.number` times while it fails
    /// with one of `handled`. Any other failure is returned immediately, and
    /// the last handled failure is returned once the attempts are used up.
    pub async fn do_with_retry<T, F, Fut>(&self, mut operation: F, handled: &[ErrorKind]) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempts_left = self.configuration.number;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_any_of(handled) && attempts_left > 0 => {
                    debug!(
                        "Retrying action after '{}', attempts left: {}",
                        e, attempts_left
                    );
                    tokio::time::sleep(self.configuration.polling_interval).await;
                    attempts_left -= 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Retrier for element actions
#[derive(Debug, Clone)]
pub struct ElementActionRetrier {
    retrier: ActionRetrier,
}

impl ElementActionRetrier {
    /// Create a new element action retrier
    pub fn new(configuration: RetryConfiguration) -> Self {
        Self {
            retrier: ActionRetrier::new(configuration),
        }
    }

    /// Failures retried by [`do_with_retry`](Self::do_with_retry)
    pub fn handled_errors(&self) -> &'static [ErrorKind] {
        ELEMENT_HANDLED_ERRORS
    }

    /// Run `operation` retrying stale references and invalid element states
    pub async fn do_with_retry<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.retrier.do_with_retry(operation, ELEMENT_HANDLED_ERRORS).await
    }

    /// Run `operation` retrying the given failures instead of the defaults
    pub async fn do_with_retry_handling<T, F, Fut>(&self, operation: F, handled: &[ErrorKind]) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.retrier.do_with_retry(operation, handled).await
    }
}
