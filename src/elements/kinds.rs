//! Concrete element kinds

use std::ops::Deref;

use super::element::Element;
use super::state::ElementState;
use crate::driver::Locator;
use crate::services::ElementServices;
use crate::Result;

macro_rules! element_kind {
    ($(#[$meta:meta])* $kind:ident, $type_name:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $kind {
            element: Element,
        }

        impl $kind {
            pub fn new(locator: Locator, name: impl Into<String>, state: ElementState, services: ElementServices) -> Self {
                Self {
                    element: Element::new(locator, name, $type_name, state, services),
                }
            }
        }

        impl Deref for $kind {
            type Target = Element;

            fn deref(&self) -> &Element {
                &self.element
            }
        }
    };
}

element_kind!(
    /// Clickable button
    Button,
    "Button"
);

element_kind!(
    /// Text input
    TextBox,
    "TextBox"
);

element_kind!(
    /// Static text
    Label,
    "Label"
);

impl TextBox {
    /// Type `text` into the box
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.send_keys(text).await
    }

    /// Current content of the box
    pub async fn value(&self) -> Result<String> {
        Ok(self.get_attribute("value").await?.unwrap_or_default())
    }
}
