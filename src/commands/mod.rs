mod check;
mod config;
mod format;
mod resolve;

use std::path::Path;

use anyhow::{Context, Result};
pub use check::handle_check;
pub use config::handle_config;
pub use format::{handle_complexity, handle_validate};
use periodic_notes::{config::Config, vault::VaultIndex};
pub use resolve::handle_resolve;
use tracing::warn;

use crate::cli::{Cli, Commands};

/// Dispatches CLI commands to their respective handlers
pub fn handle_command(config: &Config, cli: Cli) -> Result<()> {
	let vault_root = config.vault_root(cli.vault.as_deref());

	match cli.command {
		Commands::Validate { format, granularity } => handle_validate(config, &format, granularity.into()),
		Commands::Complexity { format, granularity } => handle_complexity(config, &format, granularity.into()),
		Commands::Resolve { file, granularity, format } => {
			handle_resolve(config, vault_root.as_deref(), &file, granularity.into(), format.as_deref())
		}
		Commands::Check { json } => handle_check(config, vault_root.as_deref(), json),
		Commands::Config { show } => handle_config(config, show),
	}
}

/// Scans the vault at `root`, failing when no vault is configured.
fn open_vault(root: Option<&Path>) -> Result<VaultIndex> {
	let root = root.context("No vault configured; set vault.root in the config file or pass --vault")?;
	let vault = VaultIndex::scan(root)?;
	if vault.is_empty() {
		warn!(root = %root.display(), "vault has no notes or folders; every folder and template check will fail");
	}
	Ok(vault)
}
