//! Wire models for the configuration-management service.
//!
//! Records decode with a field whitelist: fields the service adds later
//! are ignored, fields declared here without a default are required.
//! All names on the wire are PascalCase.

use serde::{Deserialize, Serialize};

/// Top-level named container for profiles and environments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Named, typed source of configuration content within an application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationProfile {
    pub application_id: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub profile_type: String,
}

/// Metadata of one hosted configuration version, as returned by the
/// list operation. The payload itself requires a follow-up get.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedConfigurationVersionSummary {
    pub application_id: String,
    pub configuration_profile_id: String,
    pub version_number: i64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One immutable, numbered snapshot of configuration content.
///
/// Content is an opaque byte payload; the client never decodes it.
#[derive(Debug, Clone)]
pub struct HostedConfigurationVersion {
    pub application_id: String,
    pub configuration_profile_id: String,
    pub version_number: i64,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Outcome of a create-version call: the HTTP status the service
/// answered with and the version number it assigned.
#[derive(Debug, Clone)]
pub struct CreatedVersion {
    pub status: u16,
    pub version_number: i64,
}

/// Named rollout shape (growth curve, duration)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentStrategy {
    pub id: String,
    pub name: String,
    pub deployment_duration_in_minutes: i64,
    pub growth_type: String,
}

/// Named deployment target within an application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Environment {
    pub application_id: String,
    pub id: String,
    pub name: String,
    pub state: String,
}

/// Server-tracked rollout of one configuration version to one
/// environment. Created by start, advanced only by the server,
/// observed here as successive snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deployment {
    pub application_id: String,
    pub environment_id: String,
    pub deployment_strategy_id: String,
    pub configuration_profile_id: String,
    #[serde(default)]
    pub configuration_version: Option<String>,
    pub deployment_number: i64,
    #[serde(default)]
    pub deployment_duration_in_minutes: i64,
    #[serde(default)]
    pub final_bake_time_in_minutes: i64,
    pub state: String,
    pub percentage_complete: f32,
}

/// Body of the start-deployment call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDeploymentRequest {
    pub configuration_profile_id: String,
    pub configuration_version: String,
    pub deployment_strategy_id: String,
    pub description: String,
}

/// One page of a paginated list response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_token: Option<String>,
}
