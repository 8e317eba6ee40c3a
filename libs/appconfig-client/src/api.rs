//! Remote API trait

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{
    Application, ConfigurationProfile, CreatedVersion, Deployment, DeploymentStrategy,
    Environment, HostedConfigurationVersion, HostedConfigurationVersionSummary,
    StartDeploymentRequest,
};

/// Operations the configuration-management service exposes.
///
/// List operations return the complete logical collection; an
/// implementation over a paginated transport must follow continuation
/// tokens to exhaustion rather than returning the first page.
#[async_trait]
pub trait AppConfigApi: Send + Sync {
    async fn list_applications(&self) -> Result<Vec<Application>, ApiError>;

    async fn list_configuration_profiles(
        &self,
        application_id: &str,
    ) -> Result<Vec<ConfigurationProfile>, ApiError>;

    async fn list_hosted_configuration_versions(
        &self,
        application_id: &str,
        profile_id: &str,
    ) -> Result<Vec<HostedConfigurationVersionSummary>, ApiError>;

    async fn get_hosted_configuration_version(
        &self,
        application_id: &str,
        profile_id: &str,
        version_number: i64,
    ) -> Result<HostedConfigurationVersion, ApiError>;

    async fn create_hosted_configuration_version(
        &self,
        application_id: &str,
        profile_id: &str,
        description: &str,
        content: &[u8],
        content_type: &str,
        latest_version_number: i64,
    ) -> Result<CreatedVersion, ApiError>;

    async fn list_deployment_strategies(&self) -> Result<Vec<DeploymentStrategy>, ApiError>;

    async fn list_environments(&self, application_id: &str) -> Result<Vec<Environment>, ApiError>;

    async fn start_deployment(
        &self,
        application_id: &str,
        environment_id: &str,
        request: &StartDeploymentRequest,
    ) -> Result<Deployment, ApiError>;

    async fn get_deployment(
        &self,
        application_id: &str,
        environment_id: &str,
        deployment_number: i64,
    ) -> Result<Deployment, ApiError>;
}
