use std::path::Path;

use tracing::{debug, warn};

use super::{json, AppConfig, ConfigMapping, HUSKY_JSON};

/// Where a config source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.husky.json` in the working directory.
    JsonFile,
    /// The `hooks` namespace of the application config.
    AppConfig,
}

/// One origin of hook commands, either present with data or absent.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub kind: SourceKind,
    pub present: bool,
    pub data: ConfigMapping,
}

impl ConfigSource {
    fn absent(kind: SourceKind) -> Self {
        ConfigSource {
            kind,
            present: false,
            data: ConfigMapping::default(),
        }
    }

    /// Source backed by the application config. Present iff it defines any hooks.
    pub fn app(config: &AppConfig) -> Self {
        let data = config.hooks().clone();
        ConfigSource {
            kind: SourceKind::AppConfig,
            present: !data.is_empty(),
            data,
        }
    }

    /// Source backed by `.husky.json` in `dir`.
    ///
    /// Absent when the file does not exist. Unreadable or malformed files are
    /// logged and treated as absent so other sources still resolve.
    pub fn json_file(dir: &Path) -> Self {
        let path = dir.join(HUSKY_JSON);
        if !path.is_file() {
            debug!(path = %path.display(), "no JSON config");
            return Self::absent(SourceKind::JsonFile);
        }
        match json::load(&path) {
            Ok(data) => ConfigSource {
                kind: SourceKind::JsonFile,
                present: true,
                data,
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed JSON config");
                Self::absent(SourceKind::JsonFile)
            }
        }
    }

    /// Default resolution order. The last source in the list wins.
    pub fn defaults(dir: &Path, app: &AppConfig) -> [ConfigSource; 2] {
        [Self::json_file(dir), Self::app(app)]
    }
}
