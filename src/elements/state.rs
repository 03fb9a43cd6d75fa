//! Element states and the descriptors finders filter by

use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::driver::RemoteElement;
use crate::Result;

/// State an element is expected to be in when it is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementState {
    #[default]
    Displayed,
    ExistsInAnyState,
}

impl ElementState {
    pub fn name(&self) -> &'static str {
        match self {
            ElementState::Displayed => "displayed",
            ElementState::ExistsInAnyState => "exist",
        }
    }

    /// Whether `element` is in this state
    pub async fn is_satisfied_by(&self, element: &dyn RemoteElement) -> Result<bool> {
        match self {
            ElementState::Displayed => element.is_displayed().await,
            ElementState::ExistsInAnyState => Ok(true),
        }
    }
}

impl fmt::Display for ElementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many elements a lookup expects to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementsCount {
    Zero,
    MoreThanZero,
    Any,
}

type StatePredicate = Arc<dyn Fn(Arc<dyn RemoteElement>) -> BoxFuture<'static, Result<bool>> + Send + Sync>;

/// Predicate plus the flags deciding how a finder reacts when nothing
/// satisfies it in time.
///
/// `catch_timeout` turns a timeout into an empty result; `raise_not_found`
/// reports an empty page as [`Error::ElementNotFound`](crate::Error::ElementNotFound).
#[derive(Clone)]
pub struct DesiredState {
    predicate: StatePredicate,
    name: String,
    catch_timeout: bool,
    raise_not_found: bool,
}

impl DesiredState {
    pub fn new<F, Fut>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Arc<dyn RemoteElement>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool>> + Send + 'static,
    {
        Self {
            predicate: Arc::new(move |element| predicate(element).boxed()),
            name: name.into(),
            catch_timeout: false,
            raise_not_found: false,
        }
    }

    pub fn enabled() -> Self {
        Self::new("enabled", |element| async move { is_element_enabled(&*element).await })
    }

    pub fn not_enabled() -> Self {
        Self::new("not enabled", |element| async move {
            Ok(!is_element_enabled(&*element).await?)
        })
    }

    pub fn clickable() -> Self {
        Self::new("clickable", |element| async move {
            Ok(element.is_displayed().await? && element.is_enabled().await?)
        })
    }

    pub fn catching_timeout(mut self, catch_timeout: bool) -> Self {
        self.catch_timeout = catch_timeout;
        self
    }

    pub fn raising_not_found(mut self, raise_not_found: bool) -> Self {
        self.raise_not_found = raise_not_found;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catch_timeout(&self) -> bool {
        self.catch_timeout
    }

    pub fn raise_not_found(&self) -> bool {
        self.raise_not_found
    }

    pub async fn is_satisfied_by(&self, element: Arc<dyn RemoteElement>) -> Result<bool> {
        (self.predicate)(element).await
    }
}

impl fmt::Debug for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesiredState")
            .field("name", &self.name)
            .field("catch_timeout", &self.catch_timeout)
            .field("raise_not_found", &self.raise_not_found)
            .finish()
    }
}

impl From<ElementState> for DesiredState {
    fn from(state: ElementState) -> Self {
        Self::new(state.name(), move |element| async move {
            state.is_satisfied_by(&*element).await
        })
    }
}

/// Enabled per the driver and not styled as disabled
pub async fn is_element_enabled(element: &dyn RemoteElement) -> Result<bool> {
    if !element.is_enabled().await? {
        return Ok(false);
    }
    let class = element.get_attribute("class").await?.unwrap_or_default();
    Ok(!class.contains("disabled"))
}
