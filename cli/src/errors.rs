//! Error types for the appconf CLI

use thiserror::Error;

use appconfig_client::ApiError;

/// The four name-addressed collections of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Application,
    ConfigurationProfile,
    DeploymentStrategy,
    Environment,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Application => "application",
            ResourceKind::ConfigurationProfile => "configuration profile",
            ResourceKind::DeploymentStrategy => "deployment strategy",
            ResourceKind::Environment => "environment",
        };
        f.write_str(name)
    }
}

/// Main error type for the appconf CLI
#[derive(Error, Debug)]
pub enum AppConfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("{kind} {name:?} not found")]
    NotFound { kind: ResourceKind, name: String },

    #[error("no hosted configuration versions found for profile {profile_id}")]
    NoVersionsFound { profile_id: String },

    #[error("creating configuration version for profile {profile_id} rejected: {detail}")]
    WriteRejected { profile_id: String, detail: String },

    #[error("cannot start deployment: {kind} {name:?} did not resolve")]
    UnresolvedDependency { kind: ResourceKind, name: String },

    #[error("polling deployment {deployment_number} failed: {source}")]
    PollFailed {
        deployment_number: i64,
        #[source]
        source: ApiError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
