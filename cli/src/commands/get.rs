//! `appconf get` — print the current hosted configuration

use std::io::Write;

use colored::Colorize;

use appconfig_client::AppConfigApi;

use crate::errors::AppConfError;
use crate::{resolve, versions};

#[derive(Debug, Clone)]
pub struct GetOptions {
    /// Application name
    pub app: String,

    /// Configuration profile name
    pub profile: String,

    /// Print resolution metadata before the content
    pub meta: bool,
}

pub async fn handle(api: &dyn AppConfigApi, opts: GetOptions) -> Result<(), AppConfError> {
    let (application, profile) = resolve::setup(api, &opts.app, &opts.profile).await?;

    let latest = match versions::get_latest(api, &application, &profile).await {
        Ok(version) => version,
        Err(AppConfError::NoVersionsFound { .. }) => {
            eprintln!(
                "{}",
                format!(
                    "No hosted configuration versions found for {} ({})!",
                    application.name, application.id
                )
                .red()
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if opts.meta {
        println!(
            "{} {} ({})",
            "Application:".blue().bold(),
            application.name,
            application.id
        );
        println!(
            "{} {} ({})",
            "Configuration:".blue().bold(),
            profile.name,
            profile.id
        );
        println!("{} {}", "Version:".blue().bold(), latest.version_number);
        println!("{}", "─".repeat(40));
    }

    // Content is opaque bytes; write it through untouched.
    let mut stdout = std::io::stdout();
    stdout.write_all(&latest.content)?;
    if !latest.content.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }

    Ok(())
}
