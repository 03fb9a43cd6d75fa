//! Unified error types for Chaser-Elements

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Chaser-Elements
#[derive(Error, Debug)]
pub enum Error {
    /// The remote element handle no longer points at a live node
    #[error("Stale element reference: {0}")]
    StaleReference(String),

    /// The element is not in a state that allows the action
    #[error("Invalid element state: {0}")]
    InvalidElementState(String),

    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Failures reported by the driver transport
    #[error("Driver error: {0}")]
    Driver(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A locator that cannot be combined or indexed as asked
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    /// Localization resources are missing or malformed
    #[error("Localization error: {0}")]
    Localization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Discriminant of [`Error`], used to name the failures a retry or a wait
/// is allowed to swallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StaleReference,
    InvalidElementState,
    NotFound,
    Timeout,
    Driver,
    Configuration,
    InvalidLocator,
    Localization,
    Io,
    Serialization,
    Internal,
}

impl Error {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::StaleReference(_) => ErrorKind::StaleReference,
            Error::InvalidElementState(_) => ErrorKind::InvalidElementState,
            Error::ElementNotFound(_) => ErrorKind::NotFound,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::Driver(_) => ErrorKind::Driver,
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::InvalidLocator(_) => ErrorKind::InvalidLocator,
            Error::Localization(_) => ErrorKind::Localization,
            Error::Io(_) => ErrorKind::Io,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the kind of this error is one of `kinds`
    pub fn is_any_of(&self, kinds: &[ErrorKind]) -> bool {
        kinds.contains(&self.kind())
    }

    /// Create a new stale reference error
    pub fn stale_reference<S: Into<String>>(msg: S) -> Self {
        Error::StaleReference(msg.into())
    }

    /// Create a new invalid element state error
    pub fn invalid_element_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidElementState(msg.into())
    }

    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(msg: S) -> Self {
        Error::ElementNotFound(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        Error::Driver(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn invalid_locator<S: Into<String>>(msg: S) -> Self {
        Error::InvalidLocator(msg.into())
    }

    /// Create a new localization error
    pub fn localization<S: Into<String>>(msg: S) -> Self {
        Error::Localization(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Error::stale_reference("x").kind(), ErrorKind::StaleReference);
        assert_eq!(Error::element_not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(Error::timeout("x").kind(), ErrorKind::Timeout);
    }

    #[test]
    fn test_is_any_of() {
        let err = Error::invalid_element_state("disabled");
        assert!(err.is_any_of(&[ErrorKind::StaleReference, ErrorKind::InvalidElementState]));
        assert!(!err.is_any_of(&[ErrorKind::Timeout]));
        assert!(!err.is_any_of(&[]));
    }

    #[test]
    fn test_display_keeps_context() {
        let err = Error::timeout("waiting for button");
        assert_eq!(err.to_string(), "Operation timeout: waiting for button");
    }
}
