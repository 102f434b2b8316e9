//! In-memory contact directory with a first-letter index, persisted through a
//! [`ContactStore`] after every mutation.
//!
//! Mutations run in three steps: validate, apply to memory, rewrite storage.
//! Validation and existence checks happen before anything is touched, so a
//! rejected call leaves memory and storage unchanged. If the rewrite itself
//! fails, the in-memory change is undone before the error is returned; the
//! file keeps its previous contents because stores replace it atomically.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::contact::Contact;
use crate::core::index::LetterIndex;
use crate::core::invariants::validate_index;
use crate::core::search::NameMatcher;
use crate::error::{AgendaError, Result};
use crate::io::config::LoadPolicy;
use crate::io::contact_store::{ContactStore, FileStore};

#[derive(Debug)]
pub struct Directory<S: ContactStore = FileStore> {
    contacts: BTreeMap<String, Contact>,
    index: LetterIndex,
    store: S,
    skipped_on_load: usize,
}

impl Directory<FileStore> {
    /// Open a directory backed by the contact file at `path`.
    pub fn open_file(path: impl Into<PathBuf>, policy: LoadPolicy) -> Result<Self> {
        Self::open(FileStore::new(path), policy)
    }
}

impl<S: ContactStore> Directory<S> {
    /// Seed a directory from `store`.
    ///
    /// Under [`LoadPolicy::Strict`] the first corrupt or duplicate entry fails
    /// the open. Under [`LoadPolicy::Lenient`] such entries are logged and
    /// skipped; they remain in the file until the next mutation rewrites it.
    /// Storage errors fail the open under either policy.
    pub fn open(store: S, policy: LoadPolicy) -> Result<Self> {
        let mut directory = Self {
            contacts: BTreeMap::new(),
            index: LetterIndex::new(),
            store,
            skipped_on_load: 0,
        };

        for entry in directory.store.read_entries()? {
            let outcome = entry.contact.and_then(|contact| {
                if directory.contacts.contains_key(&contact.name) {
                    return Err(AgendaError::CorruptData {
                        line: entry.line,
                        reason: format!("duplicate name '{}'", contact.name),
                    });
                }
                Ok(contact)
            });
            match (outcome, policy) {
                (Ok(contact), _) => directory.put(contact),
                (Err(err), LoadPolicy::Strict) => return Err(err),
                (Err(err), LoadPolicy::Lenient) => {
                    warn!(line = entry.line, error = %err, "skipping contact entry");
                    directory.skipped_on_load += 1;
                }
            }
        }

        debug!(
            contacts = directory.contacts.len(),
            skipped = directory.skipped_on_load,
            ?policy,
            "directory loaded"
        );
        Ok(directory)
    }

    /// Add a new contact and persist the full set.
    pub fn insert(&mut self, contact: Contact) -> Result<()> {
        contact.validate()?;
        if self.contacts.contains_key(&contact.name) {
            return Err(AgendaError::DuplicateName { name: contact.name });
        }

        let name = contact.name.clone();
        self.put(contact);
        if let Err(err) = self.persist() {
            self.index.remove(&name);
            self.contacts.remove(&name);
            error!(name = %name, error = %err, "insert rolled back: contact file not written");
            return Err(err);
        }
        info!(name = %name, "contact inserted");
        Ok(())
    }

    /// Replace the stored contact with the same name and persist the full set.
    ///
    /// The name is the key and cannot change; the index is left as is.
    /// Returns the previous value.
    pub fn update(&mut self, contact: Contact) -> Result<Contact> {
        contact.validate()?;
        let Some(slot) = self.contacts.get_mut(&contact.name) else {
            return Err(AgendaError::NotFound { name: contact.name });
        };

        let previous = std::mem::replace(slot, contact);
        if let Err(err) = self.persist() {
            let name = previous.name.clone();
            self.contacts.insert(name.clone(), previous);
            error!(name = %name, error = %err, "update rolled back: contact file not written");
            return Err(err);
        }
        info!(name = %previous.name, "contact updated");
        Ok(previous)
    }

    /// Remove a contact and persist the full set. Returns the removed value.
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let Some(removed) = self.contacts.remove(name) else {
            return Err(AgendaError::NotFound {
                name: name.to_string(),
            });
        };

        let slot = self.index.remove(name);
        if let Err(err) = self.persist() {
            if let Some(slot) = slot {
                self.index.restore(slot, name);
            }
            self.contacts.insert(name.to_string(), removed);
            error!(name = %name, error = %err, "delete rolled back: contact file not written");
            return Err(err);
        }
        info!(name = %name, "contact deleted");
        Ok(removed)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Contacts whose name starts with `letter`, ignoring case, in insertion
    /// order.
    pub fn list_by_letter(&self, letter: char) -> Vec<&Contact> {
        self.index
            .bucket(letter)
            .iter()
            .filter_map(|name| self.contacts.get(name))
            .collect()
    }

    /// Contacts whose name contains `fragment`, ignoring case, in name order.
    pub fn search_by_substring(&self, fragment: &str) -> Vec<&Contact> {
        let matcher = NameMatcher::new(fragment);
        self.contacts
            .values()
            .filter(|contact| matcher.matches(&contact.name))
            .collect()
    }

    /// All contacts in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Entries dropped by a lenient open.
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    /// Index consistency violations; empty when the index mirrors the store.
    pub fn check_invariants(&self) -> Vec<String> {
        validate_index(&self.contacts, &self.index)
    }

    pub fn index(&self) -> &LetterIndex {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn put(&mut self, contact: Contact) {
        self.index.insert(&contact.name);
        self.contacts.insert(contact.name.clone(), contact);
    }

    fn persist(&mut self) -> Result<()> {
        let all: Vec<&Contact> = self.contacts.values().collect();
        self.store.save(&all)
    }
}
