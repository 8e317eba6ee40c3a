//! Deployment coordinator.
//!
//! Starts a rollout and polls it to completion. The server owns the
//! deployment; this side only observes snapshots and turns their
//! percentage fields into a monotonic progress signal.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use appconfig_client::models::{
    Application, ConfigurationProfile, Deployment, DeploymentStrategy, Environment,
    StartDeploymentRequest,
};
use appconfig_client::AppConfigApi;

use crate::errors::{AppConfError, ResourceKind};
use crate::resolve;

/// Coordinator options
#[derive(Debug, Clone)]
pub struct Options {
    /// Delay between successive status polls
    pub poll_interval: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(20),
        }
    }
}

/// One normalized progress event.
///
/// `delta` is the locally-computed increment since the previous event,
/// floored at zero: a snapshot that regresses never emits negative
/// progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Highest percentage observed so far
    pub percent_complete: f32,

    /// Increment over the previous event
    pub delta: f32,

    /// Server-reported deployment state
    pub state: String,
}

/// Start a deployment of one configuration version to an environment
pub async fn start(
    api: &dyn AppConfigApi,
    application: &Application,
    profile: &ConfigurationProfile,
    strategy: &DeploymentStrategy,
    environment: &Environment,
    configuration_version: i64,
) -> Result<Deployment, AppConfError> {
    let request = StartDeploymentRequest {
        configuration_profile_id: profile.id.clone(),
        configuration_version: configuration_version.to_string(),
        deployment_strategy_id: strategy.id.clone(),
        description: String::new(),
    };

    info!(
        "Starting deployment of version {} to environment {} ({})",
        configuration_version, environment.name, environment.id
    );

    let deployment = api
        .start_deployment(&application.id, &environment.id, &request)
        .await?;

    Ok(deployment)
}

/// Fetch the current snapshot of a running deployment.
///
/// A failed poll is not retried here. The deployment number is a stable
/// resumption key, so the caller can always poll again later.
pub async fn poll(
    api: &dyn AppConfigApi,
    application: &Application,
    environment: &Environment,
    deployment_number: i64,
) -> Result<Deployment, AppConfError> {
    api.get_deployment(&application.id, &environment.id, deployment_number)
        .await
        .map_err(|source| AppConfError::PollFailed {
            deployment_number,
            source,
        })
}

/// Poll a started deployment until the server reports 100%.
///
/// Sleeps for the full interval before every poll, emits one progress
/// event per snapshot, and stops at the first snapshot at 100% — the
/// loop never polls a finished deployment again. The returned snapshot
/// carries the final bake time.
pub async fn drive_to_completion<S, F>(
    api: &dyn AppConfigApi,
    application: &Application,
    environment: &Environment,
    initial: Deployment,
    options: &Options,
    mut on_progress: impl FnMut(Progress),
    sleep_fn: S,
) -> Result<Deployment, AppConfError>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut current = initial;
    let mut high_water = current.percentage_complete.max(0.0);

    while current.percentage_complete < 100.0 {
        sleep_fn(options.poll_interval).await;

        current = poll(api, application, environment, current.deployment_number).await?;
        debug!(
            "Deployment {} at {}% ({})",
            current.deployment_number, current.percentage_complete, current.state
        );

        let delta = (current.percentage_complete - high_water).max(0.0);
        high_water = high_water.max(current.percentage_complete);

        on_progress(Progress {
            percent_complete: high_water,
            delta,
            state: current.state.clone(),
        });
    }

    info!(
        "Deployment {} complete, bake time {} minutes",
        current.deployment_number, current.final_bake_time_in_minutes
    );

    Ok(current)
}

/// Resolve, start, and poll a rollout to completion.
///
/// Strategy and environment names are resolved first; either one
/// missing fails before any mutating call is issued.
#[allow(clippy::too_many_arguments)]
pub async fn run<S, F>(
    api: &dyn AppConfigApi,
    application: &Application,
    profile: &ConfigurationProfile,
    strategy_name: &str,
    environment_name: &str,
    configuration_version: i64,
    options: &Options,
    on_progress: impl FnMut(Progress),
    sleep_fn: S,
) -> Result<Deployment, AppConfError>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let strategy = resolve::get_deployment_strategy(api, strategy_name)
        .await?
        .ok_or_else(|| AppConfError::UnresolvedDependency {
            kind: ResourceKind::DeploymentStrategy,
            name: strategy_name.to_string(),
        })?;

    let environment = resolve::get_environment(api, &application.id, environment_name)
        .await?
        .ok_or_else(|| AppConfError::UnresolvedDependency {
            kind: ResourceKind::Environment,
            name: environment_name.to_string(),
        })?;

    let initial = start(
        api,
        application,
        profile,
        &strategy,
        &environment,
        configuration_version,
    )
    .await?;

    drive_to_completion(
        api,
        application,
        &environment,
        initial,
        options,
        on_progress,
        sleep_fn,
    )
    .await
}
