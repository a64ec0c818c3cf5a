use anyhow::Result;
use periodic_notes::config::Config;

use crate::utils::confirm;

/// Handles the config command - shows the loaded configuration or writes a
/// fresh default file
pub fn handle_config(config: &Config, show: bool) -> Result<()> {
	let config_path = Config::get_config_path()?;
	if show {
		println!("# {}\n", config_path.display());
		println!("{}", toml::to_string_pretty(config)?);

		let enabled: Vec<String> = config
			.enabled_periods()
			.map(|(g, period)| format!("{g} ({})", period.effective_format(g)))
			.collect();
		println!("Enabled: {}", if enabled.is_empty() { "none".to_string() } else { enabled.join(", ") });
		return Ok(());
	}

	if config_path.exists() && !confirm(&format!("Overwrite {}?", config_path.display())) {
		println!("Cancelled.");
		return Ok(());
	}

	Config::default().save()?;
	println!("Wrote default configuration to {}", config_path.display());
	println!("Set vault.root and enable the periods you use.");
	Ok(())
}
