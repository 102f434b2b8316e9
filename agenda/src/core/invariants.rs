//! Consistency checks between the primary store and the letter index.

use std::collections::{BTreeMap, HashSet};

use crate::contact::{Contact, letter_key};
use crate::core::index::LetterIndex;

/// Check that the index is an exact projection of the primary store:
/// - Primary keys equal the stored contact's name
/// - No empty buckets
/// - Each indexed name exists in the primary store, once, in the right bucket
/// - Every stored name is indexed
pub fn validate_index(primary: &BTreeMap<String, Contact>, index: &LetterIndex) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (key, contact) in primary {
        if key != &contact.name {
            errors.push(format!(
                "primary key '{}' holds contact named '{}'",
                key, contact.name
            ));
        }
    }

    for (letter, names) in index.buckets() {
        if names.is_empty() {
            errors.push(format!("bucket '{}' is empty", letter));
        }
        for name in names {
            if !seen.insert(name.as_str()) {
                errors.push(format!("'{}' indexed more than once", name));
            }
            if !primary.contains_key(name) {
                errors.push(format!("'{}' indexed under '{}' but not stored", name, letter));
            }
            if name.chars().next().map(letter_key) != Some(letter) {
                errors.push(format!("'{}' filed under wrong bucket '{}'", name, letter));
            }
        }
    }

    for name in primary.keys() {
        if !seen.contains(name.as_str()) {
            errors.push(format!("'{}' stored but not indexed", name));
        }
    }

    errors
}
