//! Stable exit codes for agenda CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, config or storage failure.
pub const INVALID: i32 = 1;
/// `get`, `update` or `delete` named a contact that does not exist.
pub const NOT_FOUND: i32 = 2;
/// `insert` named a contact that already exists.
pub const CONFLICT: i32 = 3;
/// The contact file could not be parsed.
pub const CORRUPT: i32 = 4;
