//! HTTP client implementation

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::api::AppConfigApi;
use crate::errors::ApiError;
use crate::models::{
    Application, ConfigurationProfile, CreatedVersion, Deployment, DeploymentStrategy,
    Environment, HostedConfigurationVersion, HostedConfigurationVersionSummary, Page,
    StartDeploymentRequest,
};

/// HTTP client for the configuration-management service
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Create a new HTTP client with a bearer token for authentication
    pub fn with_token(base_url: &str, token: String) -> Result<Self, ApiError> {
        let mut client = Self::new(base_url)?;
        client.token = Some(token);
        Ok(client)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn check(&self, response: Response, context: &str) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("{} failed: {} - {}", context, status, body);
            return Err(ApiError::Status { status, body });
        }
        Ok(response)
    }

    /// Make a GET request and decode the JSON response
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        let response = self.check(response, "GET").await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch every page of a paginated listing.
    ///
    /// Resolution scans complete collections, so a listing never stops
    /// at the first page the service happens to return.
    async fn list_all<T: DeserializeOwned + Send>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page_path = match &next_token {
                Some(token) => format!("{}?next_token={}", path, token),
                None => path.to_string(),
            };

            let page: Page<T> = self.get_json(&page_path).await?;
            items.extend(page.items);

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => return Ok(items),
            }
        }
    }

    fn header_i64(response: &Response, name: &str) -> Option<i64> {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }
}

#[async_trait]
impl AppConfigApi for HttpClient {
    async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.list_all("/applications").await
    }

    async fn list_configuration_profiles(
        &self,
        application_id: &str,
    ) -> Result<Vec<ConfigurationProfile>, ApiError> {
        let path = format!("/applications/{}/configurationprofiles", application_id);
        self.list_all(&path).await
    }

    async fn list_hosted_configuration_versions(
        &self,
        application_id: &str,
        profile_id: &str,
    ) -> Result<Vec<HostedConfigurationVersionSummary>, ApiError> {
        let path = format!(
            "/applications/{}/configurationprofiles/{}/hostedconfigurationversions",
            application_id, profile_id
        );
        self.list_all(&path).await
    }

    async fn get_hosted_configuration_version(
        &self,
        application_id: &str,
        profile_id: &str,
        version_number: i64,
    ) -> Result<HostedConfigurationVersion, ApiError> {
        let url = format!(
            "{}/applications/{}/configurationprofiles/{}/hostedconfigurationversions/{}",
            self.base_url, application_id, profile_id, version_number
        );
        debug!("GET {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        let response = self.check(response, "GET version").await?;

        // The payload travels as the raw response body; metadata rides
        // in headers.
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let content = response.bytes().await?.to_vec();

        Ok(HostedConfigurationVersion {
            application_id: application_id.to_string(),
            configuration_profile_id: profile_id.to_string(),
            version_number,
            content_type,
            content,
        })
    }

    async fn create_hosted_configuration_version(
        &self,
        application_id: &str,
        profile_id: &str,
        description: &str,
        content: &[u8],
        content_type: &str,
        latest_version_number: i64,
    ) -> Result<CreatedVersion, ApiError> {
        let url = format!(
            "{}/applications/{}/configurationprofiles/{}/hostedconfigurationversions",
            self.base_url, application_id, profile_id
        );
        debug!("POST {} ({} bytes)", url, content.len());

        let request = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, content_type)
            .header("Description", description)
            .header("Latest-Version-Number", latest_version_number)
            .body(content.to_vec());

        let response = self.authorize(request).send().await?;
        let status = response.status().as_u16();
        let response = self.check(response, "POST version").await?;

        let version_number = Self::header_i64(&response, "Version-Number").ok_or_else(|| {
            ApiError::Status {
                status,
                body: "missing Version-Number header in create response".to_string(),
            }
        })?;

        Ok(CreatedVersion {
            status,
            version_number,
        })
    }

    async fn list_deployment_strategies(&self) -> Result<Vec<DeploymentStrategy>, ApiError> {
        self.list_all("/deploymentstrategies").await
    }

    async fn list_environments(&self, application_id: &str) -> Result<Vec<Environment>, ApiError> {
        let path = format!("/applications/{}/environments", application_id);
        self.list_all(&path).await
    }

    async fn start_deployment(
        &self,
        application_id: &str,
        environment_id: &str,
        request: &StartDeploymentRequest,
    ) -> Result<Deployment, ApiError> {
        let url = format!(
            "{}/applications/{}/environments/{}/deployments",
            self.base_url, application_id, environment_id
        );
        debug!("POST {}", url);

        let response = self
            .authorize(self.client.post(&url).json(request))
            .send()
            .await?;
        let response = self.check(response, "POST deployment").await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_deployment(
        &self,
        application_id: &str,
        environment_id: &str,
        deployment_number: i64,
    ) -> Result<Deployment, ApiError> {
        let path = format!(
            "/applications/{}/environments/{}/deployments/{}",
            application_id, environment_id, deployment_number
        );
        self.get_json(&path).await
    }
}
