//! Element cache switch

use crate::config::JsonSettingsFile;
use crate::Result;

/// Whether elements keep their located remote element between actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCacheConfiguration {
    pub enabled: bool,
}

impl ElementCacheConfiguration {
    pub fn from_settings(settings: &JsonSettingsFile) -> Result<Self> {
        Ok(Self {
            enabled: settings.get_value_or_default("elementCache.isEnabled", false)?,
        })
    }
}
