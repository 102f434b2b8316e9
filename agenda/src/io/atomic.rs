//! Atomic file replacement shared by the contact store and config writer.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write via a sibling `<name>.tmp` file and rename over `path`, so readers see
/// either the old or the new contents. Missing parent directories are created.
/// The temp file is removed if the rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = temp_path(path);
    fs::write(&tmp_path, contents)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

/// Sibling temp path used by [`write_atomic`].
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
