//! Shared test fixtures: a mock remote API and canned records

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use appconfig_client::models::{
    Application, ConfigurationProfile, CreatedVersion, Deployment, DeploymentStrategy,
    Environment, HostedConfigurationVersion, HostedConfigurationVersionSummary,
    StartDeploymentRequest,
};
use appconfig_client::{ApiError, AppConfigApi};

pub const APP_NAME: &str = "app-name";
pub const APP_ID: &str = "app-id";
pub const PROFILE_NAME: &str = "config-profile-name";
pub const PROFILE_ID: &str = "config-profile-id";
pub const ENVIRONMENT_ID: &str = "env-id";
pub const STRATEGY_ID: &str = "AppConfig.Linear50PercentEvery30Seconds";

pub fn application() -> Application {
    Application {
        id: APP_ID.to_string(),
        name: APP_NAME.to_string(),
        description: Some("app-description".to_string()),
    }
}

pub fn profile() -> ConfigurationProfile {
    ConfigurationProfile {
        application_id: APP_ID.to_string(),
        id: PROFILE_ID.to_string(),
        name: PROFILE_NAME.to_string(),
        profile_type: "AWS.Freeform".to_string(),
    }
}

pub fn summary(version_number: i64) -> HostedConfigurationVersionSummary {
    HostedConfigurationVersionSummary {
        application_id: APP_ID.to_string(),
        configuration_profile_id: PROFILE_ID.to_string(),
        version_number,
        content_type: Some("application/json".to_string()),
        description: Some("config-description".to_string()),
    }
}

pub fn hosted(version_number: i64, content: &str) -> HostedConfigurationVersion {
    HostedConfigurationVersion {
        application_id: APP_ID.to_string(),
        configuration_profile_id: PROFILE_ID.to_string(),
        version_number,
        content_type: "application/json".to_string(),
        content: content.as_bytes().to_vec(),
    }
}

pub fn strategy() -> DeploymentStrategy {
    DeploymentStrategy {
        id: STRATEGY_ID.to_string(),
        name: STRATEGY_ID.to_string(),
        deployment_duration_in_minutes: 30,
        growth_type: "LINEAR".to_string(),
    }
}

pub fn environment() -> Environment {
    Environment {
        application_id: APP_ID.to_string(),
        id: ENVIRONMENT_ID.to_string(),
        name: "default".to_string(),
        state: "READY_FOR_DEPLOYMENT".to_string(),
    }
}

pub fn snapshot(percentage_complete: f32) -> Deployment {
    Deployment {
        application_id: APP_ID.to_string(),
        environment_id: ENVIRONMENT_ID.to_string(),
        deployment_strategy_id: STRATEGY_ID.to_string(),
        configuration_profile_id: PROFILE_ID.to_string(),
        configuration_version: Some("1".to_string()),
        deployment_number: 1,
        deployment_duration_in_minutes: 30,
        final_bake_time_in_minutes: 0,
        state: if percentage_complete >= 100.0 {
            "COMPLETE".to_string()
        } else {
            "DEPLOYING".to_string()
        },
        percentage_complete,
    }
}

fn service_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "internal error".to_string(),
    }
}

/// In-memory stand-in for the remote service
#[derive(Default)]
pub struct MockApi {
    pub applications: Vec<Application>,
    pub profiles: Vec<ConfigurationProfile>,
    pub version_summaries: Vec<HostedConfigurationVersionSummary>,
    pub versions: Vec<HostedConfigurationVersion>,
    pub strategies: Vec<DeploymentStrategy>,
    pub environments: Vec<Environment>,

    /// Response for create calls; `None` simulates a thrown remote error
    pub create_response: Option<CreatedVersion>,

    /// Response for start calls; `None` simulates a thrown remote error
    pub start_response: Option<Deployment>,

    /// Snapshots handed out by successive get-deployment calls;
    /// an exhausted queue simulates a transient poll failure
    pub snapshots: Mutex<VecDeque<Deployment>>,

    pub start_calls: AtomicUsize,
    pub poll_calls: AtomicUsize,
}

impl MockApi {
    /// Mock with the standard application/profile pair resolved
    pub fn with_app_and_profile() -> Self {
        Self {
            applications: vec![application()],
            profiles: vec![profile()],
            ..Self::default()
        }
    }

    pub fn queue_snapshots(&self, percentages: &[f32]) {
        let mut queue = self.snapshots.lock().unwrap();
        queue.extend(percentages.iter().map(|p| snapshot(*p)));
    }
}

#[async_trait]
impl AppConfigApi for MockApi {
    async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        Ok(self.applications.clone())
    }

    async fn list_configuration_profiles(
        &self,
        application_id: &str,
    ) -> Result<Vec<ConfigurationProfile>, ApiError> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.application_id == application_id)
            .cloned()
            .collect())
    }

    async fn list_hosted_configuration_versions(
        &self,
        _application_id: &str,
        profile_id: &str,
    ) -> Result<Vec<HostedConfigurationVersionSummary>, ApiError> {
        Ok(self
            .version_summaries
            .iter()
            .filter(|v| v.configuration_profile_id == profile_id)
            .cloned()
            .collect())
    }

    async fn get_hosted_configuration_version(
        &self,
        _application_id: &str,
        _profile_id: &str,
        version_number: i64,
    ) -> Result<HostedConfigurationVersion, ApiError> {
        self.versions
            .iter()
            .find(|v| v.version_number == version_number)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: format!("version {} not found", version_number),
            })
    }

    async fn create_hosted_configuration_version(
        &self,
        _application_id: &str,
        _profile_id: &str,
        _description: &str,
        _content: &[u8],
        _content_type: &str,
        _latest_version_number: i64,
    ) -> Result<CreatedVersion, ApiError> {
        self.create_response.clone().ok_or_else(service_error)
    }

    async fn list_deployment_strategies(&self) -> Result<Vec<DeploymentStrategy>, ApiError> {
        Ok(self.strategies.clone())
    }

    async fn list_environments(&self, application_id: &str) -> Result<Vec<Environment>, ApiError> {
        Ok(self
            .environments
            .iter()
            .filter(|e| e.application_id == application_id)
            .cloned()
            .collect())
    }

    async fn start_deployment(
        &self,
        _application_id: &str,
        _environment_id: &str,
        _request: &StartDeploymentRequest,
    ) -> Result<Deployment, ApiError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.start_response.clone().ok_or_else(service_error)
    }

    async fn get_deployment(
        &self,
        _application_id: &str,
        _environment_id: &str,
        _deployment_number: i64,
    ) -> Result<Deployment, ApiError> {
        self.poll_calls.fetch_add(1, Ordering::SeqCst);
        let mut queue = self.snapshots.lock().unwrap();
        queue.pop_front().ok_or_else(service_error)
    }
}
