//! Command implementations for the `sumplog` CLI.

pub mod alive;
pub mod completions;
pub mod doctor;
pub mod init;
pub mod list;
pub mod save;
pub mod version;
