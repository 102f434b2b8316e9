//! Initialization helpers for `.agenda/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::config::{AgendaConfig, write_config};

/// All canonical paths within `.agenda/` for an agenda root.
#[derive(Debug, Clone)]
pub struct AgendaPaths {
    pub root: PathBuf,
    pub agenda_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AgendaPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let agenda_dir = root.join(".agenda");
        Self {
            root: root.clone(),
            agenda_dir: agenda_dir.clone(),
            config_path: agenda_dir.join("config.toml"),
        }
    }
}

/// Options for `init_agenda`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, rewrite the config even when `.agenda/` already exists.
    pub force: bool,
}

/// Create `.agenda/` with a default config and an empty contact file.
///
/// Fails if `.agenda/` already exists unless `options.force` is set. An
/// existing contact file is never truncated, even with `force`.
pub fn init_agenda(root: &Path, options: &InitOptions) -> Result<AgendaPaths> {
    let paths = AgendaPaths::new(root);
    if paths.agenda_dir.exists() && !paths.agenda_dir.is_dir() {
        return Err(anyhow!("agenda init: .agenda exists but is not a directory"));
    }
    if paths.agenda_dir.exists() && !options.force {
        return Err(anyhow!(
            "agenda init: .agenda already exists (use --force to overwrite)"
        ));
    }

    fs::create_dir_all(&paths.agenda_dir)
        .with_context(|| format!("create directory {}", paths.agenda_dir.display()))?;

    let config = AgendaConfig::default();
    write_config(&paths.config_path, &config)?;

    let data_path = config.data_path(root);
    if !data_path.exists() {
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&data_path, "").with_context(|| format!("write file {}", data_path.display()))?;
    }

    info!(root = %root.display(), "initialized agenda");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;

    #[test]
    fn init_creates_expected_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();

        let paths = init_agenda(root, &InitOptions { force: false }).expect("init");

        assert!(paths.agenda_dir.is_dir());
        assert!(paths.config_path.is_file());
        let cfg = load_config(&paths.config_path).expect("load config");
        assert_eq!(cfg, AgendaConfig::default());
        let data = fs::read_to_string(cfg.data_path(root)).expect("read data");
        assert!(data.is_empty());
    }

    #[test]
    fn init_without_force_refuses_existing_agenda_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_agenda(temp.path(), &InitOptions { force: false }).expect("init");
        let err = init_agenda(temp.path(), &InitOptions { force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    /// Verifies `--force` restores the config but keeps stored contacts.
    #[test]
    fn init_with_force_keeps_contacts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        let paths = init_agenda(root, &InitOptions { force: false }).expect("init");
        let data_path = AgendaConfig::default().data_path(root);

        fs::write(&paths.config_path, "load_policy = \"lenient\"\n").expect("write config");
        fs::write(&data_path, "Ana;111;\n").expect("write data");

        init_agenda(root, &InitOptions { force: true }).expect("re-init");

        assert_eq!(
            load_config(&paths.config_path).expect("load"),
            AgendaConfig::default()
        );
        assert_eq!(fs::read_to_string(&data_path).expect("read"), "Ana;111;\n");
    }
}
