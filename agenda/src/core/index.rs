//! First-letter secondary index over contact names.
//!
//! Buckets hold names, not contacts: the primary store stays the only owner of
//! contact values, so updates never leave a stale copy in the index.

use std::collections::BTreeMap;

use crate::contact::letter_key;

/// Position a name occupied before [`LetterIndex::remove`], used to undo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub letter: char,
    pub position: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterIndex {
    buckets: BTreeMap<char, Vec<String>>,
}

impl LetterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to its bucket, creating the bucket if absent.
    pub fn insert(&mut self, name: &str) {
        let Some(letter) = name.chars().next().map(letter_key) else {
            return;
        };
        self.buckets
            .entry(letter)
            .or_default()
            .push(name.to_string());
    }

    /// Remove `name` from its bucket, dropping the bucket once empty.
    pub fn remove(&mut self, name: &str) -> Option<Slot> {
        let letter = name.chars().next().map(letter_key)?;
        let bucket = self.buckets.get_mut(&letter)?;
        let position = bucket.iter().position(|entry| entry == name)?;
        bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&letter);
        }
        Some(Slot { letter, position })
    }

    /// Put `name` back where [`LetterIndex::remove`] found it.
    pub fn restore(&mut self, slot: Slot, name: &str) {
        let bucket = self.buckets.entry(slot.letter).or_default();
        let position = slot.position.min(bucket.len());
        bucket.insert(position, name.to_string());
    }

    /// Names starting with `letter` (case-insensitive), in insertion order.
    pub fn bucket(&self, letter: char) -> &[String] {
        self.buckets
            .get(&letter_key(letter))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn buckets(&self) -> impl Iterator<Item = (char, &[String])> {
        self.buckets
            .iter()
            .map(|(letter, names)| (*letter, names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
