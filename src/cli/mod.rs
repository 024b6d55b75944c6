pub mod hook;

use std::path::PathBuf;

/// Options accepted alongside the hook name.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print banners in uppercase.
    pub upcase: bool,
    /// Application config file to load before resolving the hook.
    pub config: Option<PathBuf>,
}
