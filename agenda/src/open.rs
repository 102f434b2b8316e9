//! Resolve config and open the directory for an agenda root.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::directory::Directory;
use crate::io::config::load_config;
use crate::io::init::AgendaPaths;

/// Load `.agenda/config.toml` (defaults if missing) and open the configured
/// contact file with the configured load policy.
///
/// Domain errors are kept as the root cause so callers can downcast them.
pub fn open_directory(root: &Path) -> Result<Directory> {
    let paths = AgendaPaths::new(root);
    let config = load_config(&paths.config_path).context("load config.toml")?;
    let data_path = config.data_path(root);
    debug!(path = %data_path.display(), policy = ?config.load_policy, "opening directory");
    let directory = Directory::open_file(&data_path, config.load_policy)
        .with_context(|| format!("open contacts {}", data_path.display()))?;
    Ok(directory)
}
