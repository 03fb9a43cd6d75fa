//! JSON settings document with environment overrides
//!
//! Values are addressed by dotted path (`timeouts.timeoutCondition`). An
//! environment variable named exactly like the path overrides the value
//! stored in the document.

use crate::{Error, Result};
use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable selecting the settings profile
pub const PROFILE_ENV_VAR: &str = "profile";

const CORE_DEFAULTS: &str = include_str!("../../resources/settings.json");

/// Settings loaded from a JSON document
#[derive(Debug, Clone)]
pub struct JsonSettingsFile {
    source: String,
    content: Config,
}

impl JsonSettingsFile {
    /// Parse settings from a JSON string
    pub fn from_json(source: impl Into<String>, json: &str) -> Result<Self> {
        let content = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?;

        Ok(Self {
            source: source.into(),
            content,
        })
    }

    /// Load settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(path.display().to_string(), &json)
    }

    /// Load `settings.{profile}.json` from `dir` when the `profile`
    /// environment variable is set, `settings.json` otherwise
    pub fn for_profile(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_file(Self::profile_path(dir.as_ref()))
    }

    /// Settings bundled with the library
    pub fn core_defaults() -> Result<Self> {
        Self::from_json("resources/settings.json", CORE_DEFAULTS)
    }

    /// Where the settings document of the active profile lives
    pub fn profile_path(dir: &Path) -> PathBuf {
        let file_name = match env::var(PROFILE_ENV_VAR) {
            Ok(profile) if !profile.is_empty() => format!("settings.{}.json", profile),
            _ => "settings.json".to_string(),
        };
        dir.join(file_name)
    }

    /// Name of the document these settings were read from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get a value, failing if neither the environment nor the document has it
    pub fn get_value<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        if let Some(env_value) = Self::env_value(path) {
            return Config::builder()
                .set_override(path, env_value)?
                .build()?
                .get::<T>(path)
                .map_err(|e| {
                    Error::configuration(format!(
                        "Environment variable {} has an unexpected format: {}",
                        path, e
                    ))
                });
        }

        self.content.get::<T>(path).map_err(|e| match e {
            config::ConfigError::NotFound(_) => Error::configuration(format!(
                "Json field by path {} was not found in {}",
                path, self.source
            )),
            other => Error::configuration(format!(
                "Json field by path {} in {} has an unexpected format: {}",
                path, self.source, other
            )),
        })
    }

    /// Get a value, or `default` when the path is absent
    pub fn get_value_or_default<T: DeserializeOwned>(&self, path: &str, default: T) -> Result<T> {
        if self.is_value_present(path) {
            self.get_value(path)
        } else {
            Ok(default)
        }
    }

    /// Get a list of strings; an environment override is comma-separated
    pub fn get_list(&self, path: &str) -> Result<Vec<String>> {
        let values = match Self::env_value(path) {
            Some(env_value) => env_value.split(',').map(str::to_string).collect(),
            None => self.get_value::<Vec<String>>(path)?,
        };

        Ok(values.into_iter().map(|v| v.trim().to_string()).collect())
    }

    /// Get every entry of an object, each entry honouring its own override
    pub fn get_map(&self, path: &str) -> Result<HashMap<String, serde_json::Value>> {
        let node: HashMap<String, serde_json::Value> = self.get_value(path)?;

        node.into_keys()
            .map(|key| {
                let value = self.get_value(&format!("{}.{}", path, key))?;
                Ok((key, value))
            })
            .collect()
    }

    /// Whether the path is set in the environment or in the document
    pub fn is_value_present(&self, path: &str) -> bool {
        Self::env_value(path).is_some() || self.content.get::<config::Value>(path).is_ok()
    }

    fn env_value(path: &str) -> Option<String> {
        match env::var(path) {
            Ok(value) if !value.is_empty() => {
                debug!("Using variable passed from environment {}={}", path, value);
                Some(value)
            }
            _ => None,
        }
    }
}
