//! Driver boundary traits
//!
//! The element model never talks to a browser directly. It locates remote
//! elements and acts on them through these interfaces, which a browser
//! backend implements.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Strategy used to interpret a locator value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum By {
    Id,
    Name,
    Css,
    XPath,
    TagName,
    ClassName,
    LinkText,
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            By::Id => "id",
            By::Name => "name",
            By::Css => "css selector",
            By::XPath => "xpath",
            By::TagName => "tag name",
            By::ClassName => "class name",
            By::LinkText => "link text",
        };
        f.write_str(name)
    }
}

/// Identifies zero or more remote elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    #[serde(rename = "by")]
    strategy: By,
    value: String,
}

impl Locator {
    pub fn new(strategy: By, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(By::Id, value)
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(By::Css, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(By::XPath, value)
    }

    pub fn strategy(&self) -> By {
        self.strategy
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Locator of the `child` matches inside the matches of `self`.
    ///
    /// XPath children combine with XPath, id, name and tag name parents;
    /// CSS children combine with CSS parents.
    pub fn child(&self, child: &Locator) -> Result<Locator, crate::Error> {
        match (child.strategy, self.strategy) {
            (By::XPath, _) => {
                let parent = self.to_xpath().ok_or_else(|| self.not_combinable(child))?;
                let relative = child.value.strip_prefix('.').unwrap_or(&child.value);
                let separator = if relative.starts_with('/') { "" } else { "/" };
                Ok(Locator::xpath(format!("{}{}{}", parent, separator, relative)))
            }
            (By::Css, By::Css) => Ok(Locator::css(format!("{} {}", self.value, child.value))),
            _ => Err(self.not_combinable(child)),
        }
    }

    /// Locator of the `index`-th match only, counting from 1
    pub fn nth(&self, index: usize) -> Result<Locator, crate::Error> {
        let xpath = self.to_xpath().ok_or_else(|| {
            crate::Error::invalid_locator(format!("'{}' cannot be indexed", self))
        })?;
        Ok(Locator::xpath(format!("({})[{}]", xpath, index)))
    }

    fn to_xpath(&self) -> Option<String> {
        match self.strategy {
            By::XPath => Some(self.value.clone()),
            By::Id => Some(format!("//*[@id='{}']", self.value)),
            By::Name => Some(format!("//*[@name='{}']", self.value)),
            By::TagName => Some(format!("//{}", self.value)),
            _ => None,
        }
    }

    fn not_combinable(&self, child: &Locator) -> crate::Error {
        crate::Error::invalid_locator(format!("'{}' cannot be searched inside '{}'", child, self))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By.{}: {}", self.strategy, self.value)
    }
}

/// Handle to a live UI element owned by the driver
///
/// Any call may fail with [`Error::StaleReference`](crate::Error::StaleReference)
/// once the underlying node is gone.
#[async_trait]
pub trait RemoteElement: Send + Sync + fmt::Debug {
    /// Driver-assigned element ID
    fn id(&self) -> &str;

    /// Check if element is displayed
    async fn is_displayed(&self) -> Result<bool, crate::Error>;

    /// Check if element is enabled
    async fn is_enabled(&self) -> Result<bool, crate::Error>;

    /// Click element
    async fn click(&self) -> Result<(), crate::Error>;

    /// Type text into element
    async fn send_keys(&self, text: &str) -> Result<(), crate::Error>;

    /// Get element attribute
    async fn get_attribute(&self, name: &str) -> Result<Option<String>, crate::Error>;

    /// Get element text
    async fn text(&self) -> Result<String, crate::Error>;
}

/// Browser driver
#[async_trait]
pub trait WebDriver: Send + Sync + fmt::Debug {
    /// Find every element matching `locator`; no match is an empty list
    async fn find_elements(&self, locator: &Locator)
        -> Result<Vec<Arc<dyn RemoteElement>>, crate::Error>;

    /// Set the driver-level implicit wait
    async fn set_implicit_wait_timeout(&self, timeout: Duration) -> Result<(), crate::Error>;

    /// Get the source of the current page
    async fn page_source(&self) -> Result<String, crate::Error>;
}

/// Application controlled through a [`WebDriver`]
#[async_trait]
pub trait Application: Send + Sync + fmt::Debug {
    /// Current driver
    fn driver(&self) -> Arc<dyn WebDriver>;

    /// Check if the application is running
    fn is_started(&self) -> bool;

    /// Set the implicit wait, skipping the driver call when it is already set
    async fn set_implicit_wait_timeout(&self, timeout: Duration) -> Result<(), crate::Error>;
}
