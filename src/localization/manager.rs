//! Message key lookup

use crate::config::LoggerConfiguration;
use crate::{Error, Result};
use phf::phf_map;
use std::collections::HashMap;
use tracing::debug;

/// Message tables bundled with the library, by language
static LOCALIZATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "en" => include_str!("../../resources/localization/en.json"),
    "ru" => include_str!("../../resources/localization/ru.json"),
};

/// Translates message keys into the configured language
#[derive(Debug, Clone)]
pub struct LocalizationManager {
    language: String,
    messages: HashMap<String, String>,
}

impl LocalizationManager {
    /// Load the table for the configured language
    pub fn new(configuration: &LoggerConfiguration) -> Result<Self> {
        Self::for_language(&configuration.language)
    }

    /// Load the table for `language`
    pub fn for_language(language: &str) -> Result<Self> {
        let table = LOCALIZATIONS.get(language).ok_or_else(|| {
            Error::localization(format!(
                "Language '{}' is not supported, available: {:?}",
                language,
                Self::supported_languages()
            ))
        })?;

        let messages: HashMap<String, String> = serde_json::from_str(table)?;

        Ok(Self {
            language: language.to_string(),
            messages,
        })
    }

    /// Languages with a bundled table
    pub fn supported_languages() -> Vec<&'static str> {
        let mut languages: Vec<_> = LOCALIZATIONS.keys().copied().collect();
        languages.sort_unstable();
        languages
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resolve `key` and substitute `{0}`, `{1}`, ... with `args`.
    ///
    /// An unknown key resolves to the key itself.
    pub fn get_localized_message(&self, key: &str, args: &[&str]) -> String {
        let template = match self.messages.get(key) {
            Some(template) => template.as_str(),
            None => {
                debug!("No '{}' localization found for key '{}'", self.language, key);
                key
            }
        };

        substitute(template, args)
    }
}

/// Replace each `{n}` placeholder with `args[n]` in one pass, so text coming
/// from an argument is never substituted again
fn substitute(template: &str, args: &[&str]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        message.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let index = &after[..close];
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let arg = args.get(index.parse::<usize>().ok()?)?;
            Some((*arg, close))
        });

        match placeholder {
            Some((arg, close)) => {
                message.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                message.push('{');
                rest = after;
            }
        }
    }
    message.push_str(rest);
    message
}
