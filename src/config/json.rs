use std::path::Path;

use serde::Deserialize;

use super::{ConfigError, ConfigMapping};

/// Name of the JSON config file looked up in the working directory.
pub const HUSKY_JSON: &str = ".husky.json";

const HOOKS_PATH: &str = "husky.hooks";

/// Shape of `.husky.json`. Everything outside `husky.hooks` is ignored.
#[derive(Debug, Deserialize)]
struct HuskyFile {
    husky: Option<HuskySection>,
}

#[derive(Debug, Deserialize)]
struct HuskySection {
    hooks: Option<serde_json::Value>,
}

/// Parse `.husky.json` content and return the normalized `husky.hooks` mapping.
pub(super) fn parse(content: &str) -> Result<ConfigMapping, ConfigError> {
    let file: HuskyFile = serde_json::from_str(content)?;
    let hooks = file
        .husky
        .and_then(|h| h.hooks)
        .ok_or(ConfigError::MissingPath(HOOKS_PATH))?;
    match hooks {
        serde_json::Value::Object(map) => Ok(ConfigMapping::from_json(&map)),
        _ => Err(ConfigError::MissingPath(HOOKS_PATH)),
    }
}

pub(super) fn load(path: &Path) -> Result<ConfigMapping, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}
