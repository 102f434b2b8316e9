//! Flat-file contact storage, one contact per line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::contact::Contact;
use crate::core::format::{decode_line, encode_line};
use crate::error::{AgendaError, Result};
use crate::io::atomic::write_atomic;

/// One persisted line after decoding. `line` is 1-indexed.
#[derive(Debug)]
pub struct StoredEntry {
    pub line: usize,
    pub contact: Result<Contact>,
}

/// Backing storage for a [`crate::directory::Directory`].
///
/// `save` always receives the complete record set and replaces whatever was
/// stored before.
pub trait ContactStore {
    /// Read every persisted entry. Per-entry decode failures are returned in
    /// place so callers can choose to skip them; storage failures abort.
    fn read_entries(&self) -> Result<Vec<StoredEntry>>;

    /// Replace stored contents with exactly `contacts`, in the given order.
    fn save(&mut self, contacts: &[&Contact]) -> Result<()>;

    /// Strict load: the first corrupt entry fails the whole load.
    fn load(&self) -> Result<Vec<Contact>> {
        self.read_entries()?
            .into_iter()
            .map(|entry| entry.contact)
            .collect()
    }
}

/// Contact store backed by a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for FileStore {
    fn read_entries(&self) -> Result<Vec<StoredEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "contact file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(AgendaError::storage(&self.path, err)),
        };
        let entries = parse_entry_bytes(&bytes);
        debug!(path = %self.path.display(), entries = entries.len(), "contact file read");
        Ok(entries)
    }

    fn save(&mut self, contacts: &[&Contact]) -> Result<()> {
        debug!(path = %self.path.display(), contacts = contacts.len(), "writing contact file");
        write_atomic(&self.path, render(contacts).as_bytes())
            .map_err(|err| AgendaError::storage(&self.path, err))
    }
}

/// Decode file contents, skipping blank lines.
pub fn parse_entries(contents: &str) -> Vec<StoredEntry> {
    parse_entry_bytes(contents.as_bytes())
}

/// Decode raw file bytes line by line, skipping blank lines.
///
/// A line that is not valid UTF-8 becomes a corrupt entry of its own; the
/// remaining lines are still decoded.
pub fn parse_entry_bytes(bytes: &[u8]) -> Vec<StoredEntry> {
    bytes
        .split(|b| *b == b'\n')
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = idx + 1;
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let contact = match std::str::from_utf8(raw) {
                Ok(text) if text.trim().is_empty() => return None,
                Ok(text) => decode_line(line, text),
                Err(_) => Err(AgendaError::CorruptData {
                    line,
                    reason: "invalid UTF-8".to_string(),
                }),
            };
            Some(StoredEntry { line, contact })
        })
        .collect()
}

/// Serialize contacts, one per line with a trailing newline.
pub fn render(contacts: &[&Contact]) -> String {
    let mut buf = String::new();
    for contact in contacts {
        buf.push_str(&encode_line(contact));
        buf.push('\n');
    }
    buf
}
