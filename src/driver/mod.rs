//! # Driver boundary
//!
//! Interfaces the element model consumes to reach a browser, plus an
//! in-memory implementation used by tests.
//!
//! ## Core concepts
//! - **Locator**: strategy and value identifying zero or more remote elements
//! - **RemoteElement**: handle to a live element, may go stale at any time
//! - **WebDriver**: finds remote elements and exposes page-level state
//! - **Application**: owns the driver and its implicit wait setting
//!
//! ## Module layout
//! - `traits`: the boundary traits and [`Locator`]
//! - `mock`: mock implementations for tests

pub mod traits;
pub mod mock;


pub use traits::{Application, By, Locator, RemoteElement, WebDriver};

pub use mock::{MockApplication, MockRemoteElement, MockWebDriver};
