//! CLI command handlers

pub mod deploy;
pub mod get;
pub mod put;
