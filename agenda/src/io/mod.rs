//! I/O helpers: contact storage, configuration and on-disk layout.

pub mod atomic;
pub mod config;
pub mod contact_store;
pub mod init;
