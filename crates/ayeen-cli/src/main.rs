//! Ayeen CLI - inspect and change accessibility settings from the terminal
//!
//! Reads and writes the same settings record the app keeps, and can replay
//! settings-screen interactions with their speech and haptic feedback printed.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_db_path;
use crate::commands::press::{press_to_action, run_settings_action, toggle_to_action};
use crate::commands::set::{run_reset, run_set};
use crate::commands::show::run_show;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ayeen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path)?;
    let scheme = cli.host_scheme;

    match cli.command {
        Commands::Show { json } => run_show(json, &db_path, scheme).await?,
        Commands::Set { field, value } => run_set(&field, &value, &db_path, scheme).await?,
        Commands::Reset => run_reset(&db_path, scheme).await?,
        Commands::Press { action } => {
            run_settings_action(press_to_action(action), &db_path, scheme).await?;
        }
        Commands::Toggle { switch, state } => {
            run_settings_action(toggle_to_action(switch, state), &db_path, scheme).await?;
        }
    }

    Ok(())
}
