use std::path::Path;

use tracing::warn;

use super::document::{ConfigDocument, ConfigSection};
use super::{ConfigError, ConfigMapping, ConfigValue};

/// Section holding hook commands in the application config.
const HOOKS_SECTION: &str = "hooks";

/// Application configuration, built once at startup and passed down by reference.
///
/// ```kdl
/// hooks {
///     pre-commit "mix format --check-formatted"
///     pre_push "mix test"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    hooks: ConfigMapping,
}

impl AppConfig {
    /// Load application config from a KDL file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::from_document(&ConfigDocument::load(path)?))
    }

    /// Parse application config from a KDL string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_document(&ConfigDocument::parse(content)?))
    }

    /// Build directly from a hooks mapping.
    pub fn with_hooks(hooks: ConfigMapping) -> Self {
        AppConfig { hooks }
    }

    /// Load `path` if given. Load failures are logged and yield an empty config.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring application config");
                Self::default()
            }
        }
    }

    /// Everything registered under the `hooks` namespace.
    pub fn hooks(&self) -> &ConfigMapping {
        &self.hooks
    }

    fn from_document(doc: &ConfigDocument) -> Self {
        let hooks = match doc.section(HOOKS_SECTION) {
            Some(section) => collect_mapping(&section),
            None => ConfigMapping::default(),
        };
        AppConfig { hooks }
    }
}

fn collect_mapping(section: &ConfigSection) -> ConfigMapping {
    let mut mapping = ConfigMapping::new();
    for node in section.nodes() {
        if let Some(children) = node.children() {
            mapping.insert(node.name(), ConfigValue::Table(collect_mapping(&children)));
        } else if let Some(command) = node.first_string() {
            mapping.insert(node.name(), ConfigValue::Command(command.to_string()));
        } else {
            warn!(
                key = node.name(),
                line = node.line(),
                "config entry has no string command, skipping"
            );
        }
    }
    mapping
}
