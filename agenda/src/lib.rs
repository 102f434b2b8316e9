//! File-backed contact directory.
//!
//! The crate keeps a strict separation between:
//!
//! - **[`core`]**: Pure, deterministic logic (line format, letter index,
//!   substring matching, index invariants). No I/O.
//! - **[`io`]**: Side-effecting operations (contact file, config, layout).
//!
//! [`directory::Directory`] ties them together: it owns the record set, keeps
//! the index consistent and rewrites storage on every mutation. Orchestration
//! modules ([`open`], [`validate`]) resolve config and paths for CLI commands.

pub mod contact;
pub mod core;
pub mod directory;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod open;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;

pub use contact::Contact;
pub use directory::Directory;
pub use error::{AgendaError, Result};
