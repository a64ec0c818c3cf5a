mod cli;
mod commands;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use commands::handle_command;
use periodic_notes::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs the log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	// Load configuration
	let config = Config::load().context("Failed to load configuration")?;

	handle_command(&config, cli)
}
