//! Element factory

use std::sync::Arc;
use std::time::Duration;

use super::element::Element;
use super::kinds::{Button, Label, TextBox};
use super::state::{ElementState, ElementsCount};
use crate::driver::{Locator, RemoteElement};
use crate::services::ElementServices;
use crate::wait::WaitOptions;
use crate::Result;

/// Creates elements sharing one set of services
#[derive(Debug, Clone)]
pub struct ElementFactory {
    services: ElementServices,
}

impl ElementFactory {
    pub fn new(services: ElementServices) -> Self {
        Self { services }
    }

    pub fn get_button(&self, locator: Locator, name: &str) -> Button {
        Button::new(locator, name, ElementState::Displayed, self.services.clone())
    }

    pub fn get_text_box(&self, locator: Locator, name: &str) -> TextBox {
        TextBox::new(locator, name, ElementState::Displayed, self.services.clone())
    }

    pub fn get_label(&self, locator: Locator, name: &str) -> Label {
        Label::new(locator, name, ElementState::Displayed, self.services.clone())
    }

    /// Element of a caller-defined kind
    pub fn get_custom_element(
        &self,
        locator: Locator,
        name: &str,
        element_type: &str,
        state: ElementState,
    ) -> Element {
        Element::new(locator, name, element_type, state, self.services.clone())
    }

    /// Element of kind `T` found by `child_locator` inside `parent`, built by
    /// `supplier`
    pub fn find_child_element<T, F>(
        &self,
        parent: &Element,
        child_locator: &Locator,
        name: &str,
        supplier: F,
        state: ElementState,
    ) -> Result<T>
    where
        F: FnOnce(Locator, String, ElementState, ElementServices) -> T,
    {
        let locator = parent.locator().child(child_locator)?;
        Ok(supplier(locator, name.to_string(), state, self.services.clone()))
    }

    /// Elements of kind `T` found by `child_locator` inside `parent`.
    ///
    /// Waits for their number to match `expected` like [`Self::find_elements`],
    /// then addresses each match by its position. Element names are `name`
    /// followed by that position.
    #[allow(clippy::too_many_arguments)]
    pub async fn find_child_elements<T, F>(
        &self,
        parent: &Element,
        child_locator: &Locator,
        name: &str,
        supplier: F,
        expected: ElementsCount,
        state: ElementState,
        timeout: Option<Duration>,
    ) -> Result<Vec<T>>
    where
        F: Fn(Locator, String, ElementState, ElementServices) -> T,
    {
        let locator = parent.locator().child(child_locator)?;
        let found = self
            .find_elements(&locator, name, expected, state, timeout)
            .await?;

        (1..=found.len())
            .map(|position| {
                Ok(supplier(
                    locator.nth(position)?,
                    format!("{} {}", name, position),
                    state,
                    self.services.clone(),
                ))
            })
            .collect()
    }

    /// Find the elements in `state`, first waiting for their number to match
    /// `expected`.
    ///
    /// Fails with [`Error::Timeout`](crate::Error::Timeout) when the count
    /// does not match in time.
    pub async fn find_elements(
        &self,
        locator: &Locator,
        name: &str,
        expected: ElementsCount,
        state: ElementState,
        timeout: Option<Duration>,
    ) -> Result<Vec<Arc<dyn RemoteElement>>> {
        let finder = self.services.finder.as_ref();
        let localization = self.services.localized_logger.localization();
        let locator_text = locator.to_string();

        match expected {
            ElementsCount::Zero => {
                let message = localization.get_localized_message(
                    "loc.elements.with.name.found.but.should.not",
                    &[name, &locator_text],
                );
                self.services
                    .conditional_wait
                    .wait_for_true(
                        move || async move {
                            Ok(finder
                                .find_elements(locator, state, Some(Duration::ZERO))
                                .await?
                                .is_empty())
                        },
                        WaitOptions::new().optional_timeout(timeout).message(message),
                    )
                    .await?;
            }
            ElementsCount::MoreThanZero => {
                let message = localization.get_localized_message(
                    "loc.no.elements.with.name.found.by.locator",
                    &[name, &locator_text],
                );
                self.services
                    .conditional_wait
                    .wait_for_true(
                        move || async move {
                            Ok(!finder
                                .find_elements(locator, state, Some(Duration::ZERO))
                                .await?
                                .is_empty())
                        },
                        WaitOptions::new().optional_timeout(timeout).message(message),
                    )
                    .await?;
            }
            ElementsCount::Any => {}
        }

        finder
            .find_elements(locator, state, Some(Duration::ZERO))
            .await
    }
}
