//! Agenda configuration stored under `.agenda/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use super::atomic::write_atomic;

/// How a directory reacts to corrupt entries while seeding from storage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Any corrupt or duplicate entry fails the load.
    #[default]
    Strict,
    /// Corrupt or duplicate entries are logged and skipped.
    Lenient,
}

/// Agenda configuration (TOML).
///
/// Missing fields default to the values used by `agenda init`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgendaConfig {
    /// Contact file, relative to the agenda root unless absolute.
    pub data_file: PathBuf,

    /// Policy applied when loading the contact file at startup.
    pub load_policy: LoadPolicy,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(".agenda/contacts.txt"),
            load_policy: LoadPolicy::Strict,
        }
    }
}

impl AgendaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("data_file must not be empty"));
        }
        Ok(())
    }

    /// Resolve `data_file` against the agenda root.
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_file)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AgendaConfig::default()`.
pub fn load_config(path: &Path) -> Result<AgendaConfig> {
    if !path.exists() {
        let cfg = AgendaConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AgendaConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AgendaConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, buf.as_bytes())
        .with_context(|| format!("write config {}", path.display()))
}
