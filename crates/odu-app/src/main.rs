use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use odu_config::Config;
use odu_lang_kannada::KannadaProcessor;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod render;
pub mod state;
pub mod status;
pub mod ui;

use self::cli::{Cli, Command, ConfigCommand};
use self::commands::{OutputOptions, run_command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&config.log_filter, cli.log_json);

    match &cli.command {
        Command::Config { action } => run_config(action, &config, cli.json),
        Command::Read => {
            let state = Arc::new(AppState::new(config));
            state.processor.ensure_overrides_file();
            run_reader(state).await
        }
        command => {
            let mut processor = KannadaProcessor::from_config(&config);
            if let Command::Lookup { record_missing, .. } = command {
                processor.set_record_missing(*record_missing);
            }

            let options = OutputOptions {
                json: cli.json,
                show_pronunciation: config.reader.show_pronunciation,
            };
            let stdout = std::io::stdout();
            run_command(command, &processor, &options, &mut stdout.lock())
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Ok(Config::load(path)?);
    }
    match &cli.profile {
        Some(name) => profile::load_user_profile(name),
        None => Ok(Config::new()),
    }
}

fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_config(action: &ConfigCommand, config: &Config, json: bool) -> anyhow::Result<()> {
    match action {
        ConfigCommand::Init { name, path, force } => {
            let written = match path {
                Some(path) => write_plain_config(path, *force)?,
                None => profile::init_profile(name, *force)?.0,
            };
            println!("{}", written.display());
        }
        ConfigCommand::Show => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("{:#?}", config);
            }
        }
    }
    Ok(())
}

fn write_plain_config(path: &Path, force: bool) -> anyhow::Result<std::path::PathBuf> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to replace it)", path.display());
    }
    Config::new().save(path)?;
    Ok(path.to_path_buf())
}

/// Interactive reader: stdin lines in, glosses and lookups out
async fn run_reader(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(tokio::io::stdout());
    controller.spawn_stdin()?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => tracing::debug!("Reader task finished"),
                    Ok(Err(e)) => tracing::error!("Reader task failed: {e}"),
                    Err(e) => tracing::error!("Reader task panicked: {e}"),
                }
            }
        } => {
            tracing::debug!("All reader tasks finished");
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests;
