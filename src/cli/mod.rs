//! CLI command implementations

pub mod clip;
pub mod init;
pub mod record;
