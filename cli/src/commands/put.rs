//! `appconf put` — upload a new hosted configuration version

use std::path::PathBuf;

use colored::Colorize;
use tokio::io::AsyncReadExt;

use appconfig_client::AppConfigApi;

use crate::errors::AppConfError;
use crate::{resolve, versions};

#[derive(Debug, Clone)]
pub struct PutOptions {
    /// Content file; stdin when absent
    pub file: Option<PathBuf>,

    /// Application name
    pub app: String,

    /// Configuration profile name
    pub profile: String,

    /// Description for the new version
    pub description: String,
}

pub async fn handle(api: &dyn AppConfigApi, opts: PutOptions) -> Result<(), AppConfError> {
    let content = match &opts.file {
        Some(path) => tokio::fs::read(path).await?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            buf
        }
    };

    let (application, profile) = resolve::setup(api, &opts.app, &opts.profile).await?;

    // First-ever write for the profile uses base version 0.
    let base_version_number = match versions::get_latest(api, &application, &profile).await {
        Ok(latest) => latest.version_number,
        Err(AppConfError::NoVersionsFound { .. }) => 0,
        Err(e) => return Err(e),
    };

    let version = versions::create(
        api,
        &application,
        &profile,
        &content,
        &opts.description,
        base_version_number,
    )
    .await?;

    println!(
        "{} {}",
        "Created new configuration version:".green(),
        version
    );

    Ok(())
}
