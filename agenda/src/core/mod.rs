//! Deterministic, pure logic shared by the directory.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod format;
pub mod index;
pub mod invariants;
pub mod search;
