//! # Element model
//!
//! Named UI elements located through the driver boundary.
//!
//! ## Core concepts
//! - **ElementFinder**: polls the driver and filters matches by a [`DesiredState`]
//! - **ElementCacheHandler**: reuses a found handle until it goes stale
//! - **StateProvider**: displayed/exist/enabled/clickable queries and waits
//! - **Element**: retried, logged actions on top of the above
//!
//! ## Module layout
//! - `state`: element states and state descriptors
//! - `finder`: element lookup
//! - `cache`: cached handles
//! - `state_provider`: live and cached state providers
//! - `element`: the base element
//! - `kinds`: button, text box and label
//! - `factory`: element creation and counted lookups

pub mod state;
pub mod finder;
pub mod cache;
pub mod state_provider;
pub mod element;
pub mod kinds;
pub mod factory;

#[cfg(test)]
mod tests;

pub use cache::ElementCacheHandler;
pub use element::Element;
pub use factory::ElementFactory;
pub use finder::ElementFinder;
pub use kinds::{Button, Label, TextBox};
pub use state::{is_element_enabled, DesiredState, ElementState, ElementsCount};
pub use state_provider::{CachedElementStateProvider, ElementStateProvider, StateProvider};
