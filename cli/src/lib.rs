//! appconf library
//!
//! Core modules for the appconf CLI: name resolution, the hosted
//! configuration version store, and the deployment coordinator.

pub mod commands;
pub mod deploy;
pub mod errors;
pub mod logs;
pub mod resolve;
pub mod versions;
