//! `appconf deploy` — roll out the latest configuration version

use std::time::Duration;

use colored::Colorize;

use appconfig_client::AppConfigApi;

use crate::deploy;
use crate::errors::AppConfError;
use crate::{resolve, versions};

#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Application name
    pub app: String,

    /// Configuration profile name
    pub profile: String,

    /// Deployment strategy name
    pub strategy: String,

    /// Target environment name
    pub environment: String,

    /// Seconds between status polls
    pub poll_interval_secs: u64,
}

pub async fn handle(api: &dyn AppConfigApi, opts: DeployOptions) -> Result<(), AppConfError> {
    let (application, profile) = resolve::setup(api, &opts.app, &opts.profile).await?;

    // Deploy the version currently stored for the profile.
    let latest = versions::get_latest(api, &application, &profile).await?;

    println!(
        "Deploying version {} of {} to {} ({})",
        latest.version_number, profile.name, opts.environment, opts.strategy
    );

    let coordinator_options = deploy::Options {
        poll_interval: Duration::from_secs(opts.poll_interval_secs),
    };

    let finished = deploy::run(
        api,
        &application,
        &profile,
        &opts.strategy,
        &opts.environment,
        latest.version_number,
        &coordinator_options,
        |progress| {
            println!(
                "  {} {:>5.1}% (+{:.1}%) {}",
                "›".cyan(),
                progress.percent_complete,
                progress.delta,
                progress.state.dimmed()
            );
        },
        tokio::time::sleep,
    )
    .await?;

    println!(
        "{} {}",
        "Deployment complete:".green().bold(),
        format!(
            "#{} (bake time {} minutes)",
            finished.deployment_number, finished.final_bake_time_in_minutes
        )
    );

    Ok(())
}
