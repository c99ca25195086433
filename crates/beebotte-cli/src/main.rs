/*
[INPUT]:  CLI arguments and YAML configuration file
[OUTPUT]: JSON results of Beebotte API calls on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use beebotte_adapter::BeebotteClient;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use beebotte_cli::{CliConfig, Command, run};

#[derive(Parser, Debug)]
#[command(name = "beebotte", version, about = "Beebotte data API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Validate configuration and exit
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(config_path = %args.config_path.display(), "starting beebotte client");

    let config = load_config(&args.config_path)?;
    info!(hostname = %config.hostname, port = config.port, "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a subcommand is required unless --dry-run is given")?;
    let client = BeebotteClient::with_config(config.credentials(), config.client_config())
        .context("create client")?;

    let output = run(&client, &command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
