mod app;
mod document;
mod json;
mod resolve;
mod source;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::NormalizedKey;

pub use app::AppConfig;
pub use json::HUSKY_JSON;
pub use resolve::{resolve, NotFound};
pub use source::{ConfigSource, SourceKind};

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("missing object at `{0}`")]
    MissingPath(&'static str),
}

/// A value stored under a config key.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// A shell command to run.
    Command(String),
    /// A nested mapping with normalized keys.
    Table(ConfigMapping),
    /// Any other JSON leaf, kept untouched.
    Other(serde_json::Value),
}

/// Mapping from normalized key to config value.
///
/// Keys are always normalized on insert, so raw hyphenated keys never reach
/// a lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMapping(BTreeMap<NormalizedKey, ConfigValue>);

impl ConfigMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under the normalized form of `key`, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: ConfigValue) {
        self.0.insert(NormalizedKey::new(key), value);
    }

    pub fn get(&self, key: &NormalizedKey) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Shallow merge: every top-level key in `other` overwrites the same key here.
    pub fn merge(&mut self, other: &ConfigMapping) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Build a mapping from a JSON object, normalizing keys recursively.
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut mapping = ConfigMapping::new();
        for (key, value) in object {
            mapping.insert(key, ConfigValue::from_json(value));
        }
        mapping
    }
}

impl ConfigValue {
    fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => ConfigValue::Command(s.clone()),
            serde_json::Value::Object(map) => ConfigValue::Table(ConfigMapping::from_json(map)),
            other => ConfigValue::Other(other.clone()),
        }
    }
}
