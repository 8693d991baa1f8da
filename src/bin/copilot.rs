//! copilot CLI — validate the environment the copilot needs at startup.

use clap::{Parser, Subcommand};
use copilot_rs::config::Config;
use copilot_rs::config::env_file::load_env_file;
use copilot_rs::config::report::Report;
use copilot_rs::config::template::ENV_TEMPLATE;
use copilot_rs::error::Error;
use copilot_rs::telemetry::bootstrap::{record_missing, start_bootstrap_span};
use copilot_rs::telemetry::metrics::record_config_load;
use copilot_rs::telemetry::{TelemetryConfig, init_telemetry};
use std::path::PathBuf;

const SERVICE_NAME: &str = "copilot";

#[derive(Parser)]
#[command(name = "copilot", about = "System design copilot: startup configuration")]
struct Cli {
    /// Load variables from this file instead of searching for .env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate configuration, then exit
    Check {
        /// Print the readiness report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the .env template
    EnvTemplate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { json } => cmd_check(cli.env_file, json),
        Command::EnvTemplate => {
            print!("{ENV_TEMPLATE}");
            Ok(())
        }
    }
}

fn cmd_check(env_file: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let loaded = load_env_file(env_file.as_deref())?;

    let report = Report::from_env();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(ref path) = loaded {
            println!("env file: {}", path.display());
        }
        print!("{report}");
    }

    match Config::load() {
        Ok(config) => {
            let _guard = init_telemetry(TelemetryConfig::from_config(&config, SERVICE_NAME))?;
            let span = start_bootstrap_span(SERVICE_NAME);
            record_config_load(true);
            span.in_scope(|| {
                tracing::info!(
                    database = config.mongo_db_name(),
                    otel = config.otel_endpoint().is_some(),
                    "configuration loaded"
                );
            });
            Ok(())
        }
        Err(Error::MissingConfiguration { missing }) => {
            let _guard = init_telemetry(TelemetryConfig::from_env(SERVICE_NAME))?;
            let span = start_bootstrap_span(SERVICE_NAME);
            record_config_load(false);
            record_missing(&span, &missing);
            Err(Error::MissingConfiguration { missing }.into())
        }
        Err(e) => Err(e.into()),
    }
}
