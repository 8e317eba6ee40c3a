//! Hosted configuration version store.
//!
//! Versions are immutable, numbered snapshots owned by the service.
//! Reading finds the numerically latest one; writing creates the next
//! one under optimistic concurrency.

use tracing::{debug, error};

use appconfig_client::models::{Application, ConfigurationProfile, HostedConfigurationVersion};
use appconfig_client::AppConfigApi;

use crate::errors::AppConfError;

/// Content type every version is stored under. The payload is passed
/// through as-is; nothing here validates that it actually is JSON.
pub const CONTENT_TYPE: &str = "application/json";

/// Get the latest hosted configuration version for a profile.
///
/// The list operation returns metadata only, so the winning version
/// number is followed by one more read for the full payload. An empty
/// version list is the expected first-ever-write condition and surfaces
/// as [`AppConfError::NoVersionsFound`].
pub async fn get_latest(
    api: &dyn AppConfigApi,
    application: &Application,
    profile: &ConfigurationProfile,
) -> Result<HostedConfigurationVersion, AppConfError> {
    let summaries = api
        .list_hosted_configuration_versions(&application.id, &profile.id)
        .await?;

    // Running maximum; strict comparison keeps the first-seen item if
    // the service ever returned a duplicate number.
    let latest = summaries
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.version_number > best.version_number {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| {
            error!("No hosted configuration versions found!");
            AppConfError::NoVersionsFound {
                profile_id: profile.id.clone(),
            }
        })?;

    debug!(
        "Latest version for profile {} is {}",
        profile.id, latest.version_number
    );

    let version = api
        .get_hosted_configuration_version(&application.id, &profile.id, latest.version_number)
        .await?;

    Ok(version)
}

/// Create a new hosted configuration version for a profile.
///
/// `base_version_number` is the version the caller last observed (0 if
/// none existed); the service rejects the write when it no longer
/// matches the true latest, so concurrent writers cannot silently
/// overwrite each other. A rejected or failed write is reported as
/// [`AppConfError::WriteRejected`] and never retried here — the caller
/// must re-read the latest version before trying again.
pub async fn create(
    api: &dyn AppConfigApi,
    application: &Application,
    profile: &ConfigurationProfile,
    content: &[u8],
    description: &str,
    base_version_number: i64,
) -> Result<i64, AppConfError> {
    let created = api
        .create_hosted_configuration_version(
            &application.id,
            &profile.id,
            description,
            content,
            CONTENT_TYPE,
            base_version_number,
        )
        .await
        .map_err(|e| {
            error!("Error creating hosted configuration version: {}", e);
            AppConfError::WriteRejected {
                profile_id: profile.id.clone(),
                detail: e.to_string(),
            }
        })?;

    if created.status != 201 {
        error!(
            "Error creating hosted configuration version: status {}",
            created.status
        );
        return Err(AppConfError::WriteRejected {
            profile_id: profile.id.clone(),
            detail: format!("unexpected status {}", created.status),
        });
    }

    Ok(created.version_number)
}
