use tracing::{debug, warn};

use super::{ConfigMapping, ConfigSource, ConfigValue};
use crate::domain::NormalizedKey;

/// No command is configured for the requested hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no command configured for hook `{0}`")]
pub struct NotFound(pub NormalizedKey);

/// Merge `sources` in order and look up `hook`.
///
/// Each present source is shallow-merged over the previous ones, so the last
/// source in the list wins on a key collision. Absent sources are skipped.
pub fn resolve(sources: &[ConfigSource], hook: &NormalizedKey) -> Result<String, NotFound> {
    let merged = sources
        .iter()
        .filter(|s| s.present)
        .fold(ConfigMapping::default(), |mut acc, source| {
            debug!(source = ?source.kind, keys = source.data.len(), "merging config source");
            acc.merge(&source.data);
            acc
        });

    match merged.get(hook) {
        Some(ConfigValue::Command(command)) => Ok(command.clone()),
        Some(other) => {
            warn!(hook = %hook, value = ?other, "configured value is not a command");
            Err(NotFound(hook.clone()))
        }
        None => {
            debug!(hook = %hook, "no command configured");
            Err(NotFound(hook.clone()))
        }
    }
}
