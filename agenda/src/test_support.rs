//! Test-only helpers for constructing contacts and in-memory stores.

use std::io;
use std::path::PathBuf;

use crate::contact::Contact;
use crate::core::format::encode_line;
use crate::error::{AgendaError, Result};
use crate::io::contact_store::{ContactStore, StoredEntry, parse_entries};

/// Create a contact with no email.
pub fn contact(name: &str, phone: &str) -> Contact {
    Contact::new(name, phone)
}

/// In-memory store holding persisted lines exactly as the file format would.
///
/// Counts saves and can be switched into a failing mode to exercise storage
/// error paths.
#[derive(Debug, Default)]
pub struct RecordingStore {
    lines: Vec<String>,
    saves: usize,
    fail_saves: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw persisted lines (may be malformed).
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.lines.iter().map(String::as_str).collect()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Make every subsequent `save` fail with a storage error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl ContactStore for RecordingStore {
    fn read_entries(&self) -> Result<Vec<StoredEntry>> {
        Ok(parse_entries(&self.lines.join("\n")))
    }

    fn save(&mut self, contacts: &[&Contact]) -> Result<()> {
        if self.fail_saves {
            return Err(AgendaError::StorageIo {
                path: PathBuf::from("<memory>"),
                source: io::Error::other("injected save failure"),
            });
        }
        self.lines = contacts.iter().map(|contact| encode_line(contact)).collect();
        self.saves += 1;
        Ok(())
    }
}
