//! Name resolution against the remote collections.
//!
//! Every resource is addressed by a human-readable name but identified
//! by a service-assigned id. Resolution lists the scoped collection and
//! scans it for an exact, case-sensitive name match. An absent name is
//! an expected outcome (`Ok(None)`), not an error.

use tracing::debug;

use appconfig_client::models::{
    Application, ConfigurationProfile, DeploymentStrategy, Environment,
};
use appconfig_client::AppConfigApi;

use crate::errors::{AppConfError, ResourceKind};

/// First item whose name matches exactly, in listing order
fn find_by_name<T>(items: Vec<T>, name: &str, name_of: impl Fn(&T) -> &str) -> Option<T> {
    items.into_iter().find(|item| name_of(item) == name)
}

/// Resolve an application by name
pub async fn get_application(
    api: &dyn AppConfigApi,
    app_name: &str,
) -> Result<Option<Application>, AppConfError> {
    let applications = api.list_applications().await?;
    debug!("Scanning {} applications for {:?}", applications.len(), app_name);
    Ok(find_by_name(applications, app_name, |a| &a.name))
}

/// Resolve a configuration profile by name within an application
pub async fn get_config_profile(
    api: &dyn AppConfigApi,
    application_id: &str,
    profile_name: &str,
) -> Result<Option<ConfigurationProfile>, AppConfError> {
    let profiles = api.list_configuration_profiles(application_id).await?;
    debug!("Scanning {} profiles for {:?}", profiles.len(), profile_name);
    Ok(find_by_name(profiles, profile_name, |p| &p.name))
}

/// Resolve a deployment strategy by name
pub async fn get_deployment_strategy(
    api: &dyn AppConfigApi,
    strategy_name: &str,
) -> Result<Option<DeploymentStrategy>, AppConfError> {
    let strategies = api.list_deployment_strategies().await?;
    debug!("Scanning {} strategies for {:?}", strategies.len(), strategy_name);
    Ok(find_by_name(strategies, strategy_name, |s| &s.name))
}

/// Resolve an environment by name within an application
pub async fn get_environment(
    api: &dyn AppConfigApi,
    application_id: &str,
    environment_name: &str,
) -> Result<Option<Environment>, AppConfError> {
    let environments = api.list_environments(application_id).await?;
    debug!("Scanning {} environments for {:?}", environments.len(), environment_name);
    Ok(find_by_name(environments, environment_name, |e| &e.name))
}

/// Resolve the application/profile parent chain every command needs.
///
/// A missing name becomes the typed `NotFound` error here, at the seam
/// to the command layer.
pub async fn setup(
    api: &dyn AppConfigApi,
    app_name: &str,
    profile_name: &str,
) -> Result<(Application, ConfigurationProfile), AppConfError> {
    let application =
        get_application(api, app_name)
            .await?
            .ok_or_else(|| AppConfError::NotFound {
                kind: ResourceKind::Application,
                name: app_name.to_string(),
            })?;

    let profile = get_config_profile(api, &application.id, profile_name)
        .await?
        .ok_or_else(|| AppConfError::NotFound {
            kind: ResourceKind::ConfigurationProfile,
            name: profile_name.to_string(),
        })?;

    Ok((application, profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps(names: &[(&str, &str)]) -> Vec<Application> {
        names
            .iter()
            .map(|(id, name)| Application {
                id: id.to_string(),
                name: name.to_string(),
                description: None,
            })
            .collect()
    }

    #[test]
    fn test_find_by_name_exact_match() {
        let found = find_by_name(apps(&[("a1", "one"), ("a2", "two")]), "two", |a| &a.name);
        assert_eq!(found.unwrap().id, "a2");
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let found = find_by_name(apps(&[("a1", "One")]), "one", |a| &a.name);
        assert!(found.is_none());
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let found = find_by_name(apps(&[("a1", "dup"), ("a2", "dup")]), "dup", |a| &a.name);
        assert_eq!(found.unwrap().id, "a1");
    }
}
