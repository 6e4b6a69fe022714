use std::path::Path;

use clap::Parser;
use medassist::cli::handlers::*;
use medassist::cli::output::print_error;
use medassist::cli::Cli;
use medassist::cli::Commands;
use medassist::config::AppConfig;
use medassist::MedAssistError;
use medassist::Result;
use tracing::info;

/// Resolve configuration: explicit file, then the default lookup, then built-in defaults
fn load_config(path: Option<&Path>) -> Result<(AppConfig, bool)> {
    if let Some(path) = path {
        return Ok((AppConfig::from_file(path)?, true));
    }

    match AppConfig::load() {
        Ok(config) => Ok((config, true)),
        Err(MedAssistError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            Ok((config, false))
        }
        Err(e) => Err(e),
    }
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port } => handle_serve_api(&config, host, port).await,
        Commands::Init => handle_init_command(&config).await,
        Commands::CleanData { input, output } => handle_clean_data(&config, input, output),
        Commands::BuildIndex {
            input,
            collection,
            rebuild,
        } => handle_build_index(&config, input, collection, rebuild).await,
        Commands::Diagnose {
            symptoms,
            top_k,
            no_save,
        } => handle_diagnose(&config, symptoms, top_k, no_save).await,
        Commands::Stats => handle_stats_command(&config).await,
        Commands::Config => handle_config_command(&config.redacted()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (config, from_file) = load_config(cli.config.as_deref())?;

    // Initialize logging
    if cli.verbose {
        medassist::logging::init_logging_with_level("debug")?;
    } else {
        medassist::logging::init_logging_with_config(&config)?;
    }

    if from_file {
        info!("Configuration loaded successfully");
    } else {
        info!("No config file found; using defaults with environment overrides");
    }
    config.validate()?;

    if let Err(e) = run(cli, config).await {
        print_error(&e.to_string());
        return Err(e);
    }

    Ok(())
}
