//! appconf - configuration management CLI
//!
//! Resolves named resources against the remote service, reads and
//! writes hosted configuration versions, and drives deployments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use appconf::commands::{deploy, get, put};
use appconf::errors::AppConfError;
use appconf::logs::{init_logging, LogLevel, LogOptions};

use appconfig_client::HttpClient;

#[derive(Parser)]
#[command(name = "appconf", version, about = "Manage hosted configuration versions and deployments")]
struct Cli {
    /// Service endpoint base URL
    #[arg(long, env = "APPCONF_ENDPOINT", global = true, default_value = "http://localhost:2772")]
    endpoint: String,

    /// Bearer token for the service
    #[arg(long, env = "APPCONF_TOKEN", global = true)]
    token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the current hosted configuration for an application & profile
    Get {
        /// Application name
        #[arg(short, long)]
        app: String,

        /// Configuration profile name
        #[arg(short, long)]
        profile: String,

        /// Display metadata
        #[arg(short, long)]
        meta: bool,
    },

    /// Upload a new hosted configuration version
    Put {
        /// Content file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Application name
        #[arg(short, long)]
        app: String,

        /// Configuration profile name
        #[arg(short, long)]
        profile: String,

        /// Description for the version
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Deploy the latest configuration version to an environment
    Deploy {
        /// Application name
        #[arg(short, long)]
        app: String,

        /// Configuration profile name
        #[arg(short, long)]
        profile: String,

        /// Deployment strategy name
        #[arg(short, long)]
        strategy: String,

        /// Target environment name
        #[arg(short, long)]
        environment: String,

        /// Seconds between status polls
        #[arg(long, default_value_t = 20)]
        poll_interval_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LogOptions {
        log_level: cli.log_level.clone(),
        json_format: false,
    })?;

    let api = match cli.token.clone() {
        Some(token) => HttpClient::with_token(&cli.endpoint, token)?,
        None => HttpClient::new(&cli.endpoint)?,
    };

    let result: Result<(), AppConfError> = match cli.command {
        Commands::Get { app, profile, meta } => {
            get::handle(&api, get::GetOptions { app, profile, meta }).await
        }
        Commands::Put {
            file,
            app,
            profile,
            description,
        } => {
            put::handle(
                &api,
                put::PutOptions {
                    file,
                    app,
                    profile,
                    description,
                },
            )
            .await
        }
        Commands::Deploy {
            app,
            profile,
            strategy,
            environment,
            poll_interval_secs,
        } => {
            deploy::handle(
                &api,
                deploy::DeployOptions {
                    app,
                    profile,
                    strategy,
                    environment,
                    poll_interval_secs,
                },
            )
            .await
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
