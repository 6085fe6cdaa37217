//! CLI command implementations

pub mod clean;
pub mod generate;
pub mod head;
pub mod init;
pub mod list;
pub mod theme;
