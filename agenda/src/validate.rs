//! Validation helpers for `agenda validate`.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::directory::Directory;
use crate::io::config::{LoadPolicy, load_config};
use crate::io::init::AgendaPaths;

/// High-level validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOutcome {
    pub contacts: usize,
}

/// Validate config and contact file.
///
/// The contact file is always loaded strictly, whatever the configured policy,
/// so every corrupt or duplicate entry is reported. The loaded index is then
/// checked against the primary store.
pub fn validate_agenda(root: &Path) -> Result<ValidateOutcome> {
    let paths = AgendaPaths::new(root);
    let config = load_config(&paths.config_path).context("load config.toml")?;
    let data_path = config.data_path(root);
    let directory = Directory::open_file(&data_path, LoadPolicy::Strict)
        .with_context(|| format!("load contacts {}", data_path.display()))?;

    let errors = directory.check_invariants();
    if !errors.is_empty() {
        return Err(anyhow!("index invariant violations:\n- {}", errors.join("\n- ")));
    }

    Ok(ValidateOutcome {
        contacts: directory.len(),
    })
}
