//! Remote API client for the configuration-management service.
//!
//! The service owns all state; this crate only names its resources and
//! speaks its wire protocol. Core logic depends on the [`api::AppConfigApi`]
//! trait, not on the HTTP implementation, so tests can substitute a mock.

pub mod api;
pub mod client;
pub mod errors;
pub mod models;

pub use api::AppConfigApi;
pub use client::HttpClient;
pub use errors::ApiError;
