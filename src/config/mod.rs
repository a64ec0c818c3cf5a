mod calendar;
mod period;
mod vault;

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
pub use calendar::{CalendarConfig, WeekStart};
pub use period::PeriodConfig;
use serde::{Deserialize, Serialize};
pub use vault::VaultConfig;

use crate::{
	calendar::{MomentEngine, SystemClock},
	granularity::Granularity,
	validation::validate_format,
};

/// Configuration for periodic notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub vault:    VaultConfig,
	#[serde(default)]
	pub calendar: CalendarConfig,
	#[serde(default = "PeriodConfig::enabled")]
	pub day:      PeriodConfig,
	#[serde(default)]
	pub week:     PeriodConfig,
	#[serde(default)]
	pub month:    PeriodConfig,
	#[serde(default)]
	pub quarter:  PeriodConfig,
	#[serde(default)]
	pub year:     PeriodConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			vault:    VaultConfig::default(),
			calendar: CalendarConfig::default(),
			day:      PeriodConfig::enabled(),
			week:     PeriodConfig::default(),
			month:    PeriodConfig::default(),
			quarter:  PeriodConfig::default(),
			year:     PeriodConfig::default(),
		}
	}
}

/// TOML string literal with escaping.
fn quoted(value: &str) -> String { toml::Value::String(value.to_string()).to_string() }

impl Config {
	/// Loads configuration from the default config file path.
	/// Auto-generates config with defaults on first run.
	pub fn load() -> Result<Self> {
		let config_path = Self::get_config_path()?;

		if !config_path.exists() {
			let config = Self::default();
			config.save_to(&config_path)?;
			return Ok(config);
		}

		Self::load_from(&config_path)
	}

	/// Loads and validates the configuration file at `path`.
	pub fn load_from(path: &Path) -> Result<Self> {
		let config_str = fs::read_to_string(path).context("Failed to read config file")?;

		let config: Self = toml::from_str(&config_str).context("Failed to parse config file")?;
		config.validate()?;
		Ok(config)
	}

	/// Saves the configuration to the default config file path with inline
	/// comments.
	pub fn save(&self) -> Result<()> { self.save_to(&Self::get_config_path()?) }

	pub fn save_to(&self, config_path: &Path) -> Result<()> {
		// Ensure parent directory exists
		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent).context("Failed to create config directory")?;
		}

		fs::write(config_path, self.to_toml_with_comments()).context("Failed to write config file")?;

		Ok(())
	}

	/// Generates TOML string with helpful inline comments for each field
	fn to_toml_with_comments(&self) -> String {
		let mut out = format!(
			r#"# periodic-notes configuration file
# Formats use moment.js tokens, e.g. YYYY-MM-DD or gggg-[W]ww.
# Text inside [brackets] is literal; "/" nests notes into folders.

[vault]
{root}
[calendar]
# First day of the week: sunday, monday, ... saturday
week_start = "{week_start}"
"#,
			root = match self.vault.root {
				Some(ref root) => format!("root = {}\n", quoted(&root.to_string_lossy())),
				None => "# root = \"~/Notes\"\n".to_string(),
			},
			week_start = self.calendar.week_start,
		);

		for granularity in Granularity::ALL {
			let period = self.period(granularity);
			out.push_str(&format!(
				r#"
[{granularity}]
enabled = {enabled}
# Empty uses the default format ({default_format})
format = {format}
# Folder for new notes; empty is the vault root
folder = {folder}
# Template note, as a link; empty for none
template = {template}
"#,
				enabled = period.enabled,
				default_format = granularity.default_format(),
				format = quoted(&period.format),
				folder = quoted(&period.folder),
				template = quoted(&period.template),
			));
		}

		out
	}

	/// Returns the platform-specific configuration file path following XDG spec.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/periodic-notes/config.toml
	/// 2. ~/.config/periodic-notes/config.toml (Unix)
	/// 3. ~/Library/Application Support/periodic-notes/config.toml (macOS
	///    fallback)
	/// 4. %APPDATA%\periodic-notes\config.toml (Windows)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
			PathBuf::from(xdg_config)
		} else if cfg!(target_os = "macos") {
			// On macOS, prefer ~/.config but fall back to Application Support
			let home = dirs::home_dir().context("Failed to get home directory")?;
			let xdg_path = home.join(".config");
			if xdg_path.exists() {
				xdg_path
			} else {
				dirs::config_dir().unwrap_or_else(|| home.join("Library/Application Support"))
			}
		} else {
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join("periodic-notes").join("config.toml"))
	}

	pub const fn period(&self, granularity: Granularity) -> &PeriodConfig {
		match granularity {
			Granularity::Day => &self.day,
			Granularity::Week => &self.week,
			Granularity::Month => &self.month,
			Granularity::Quarter => &self.quarter,
			Granularity::Year => &self.year,
		}
	}

	/// Periods switched on in this configuration, finest first.
	pub fn enabled_periods(&self) -> impl Iterator<Item = (Granularity, &PeriodConfig)> {
		Granularity::ALL.into_iter().map(|g| (g, self.period(g))).filter(|(_, period)| period.enabled)
	}

	/// Date engine using the configured week start and the system clock.
	pub fn engine(&self) -> MomentEngine<SystemClock> {
		MomentEngine::system().with_week_start(self.calendar.week_start.weekday())
	}

	/// Vault root, preferring `override_root` over the configured one.
	pub fn vault_root(&self, override_root: Option<&Path>) -> Option<PathBuf> {
		override_root.map(Path::to_path_buf).or_else(|| self.vault.root.clone())
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<()> {
		let engine = self.engine();

		for granularity in Granularity::ALL {
			let period = self.period(granularity);
			if let Err(err) = validate_format(&engine, &period.format, granularity) {
				anyhow::bail!("{granularity}.format '{}': {err}", period.format);
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_enable_daily_notes_only() {
		let config = Config::default();
		let enabled: Vec<_> = config.enabled_periods().map(|(g, _)| g).collect();
		assert_eq!(enabled, [Granularity::Day]);
		assert_eq!(config.day.effective_format(Granularity::Day), "YYYY-MM-DD");
		assert_eq!(config.week.effective_format(Granularity::Week), "gggg-[W]ww");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn commented_file_round_trips() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested/config.toml");

		let mut config = Config::default();
		config.vault.root = Some(PathBuf::from("/home/me/Notes"));
		config.calendar.week_start = WeekStart::Monday;
		config.week = PeriodConfig {
			enabled:  true,
			format:   "gggg/[W]ww".to_string(),
			folder:   "Journal/Weekly".to_string(),
			template: "Templates/Weekly \"plan\"".to_string(),
		};

		config.save_to(&path).unwrap();
		let loaded = Config::load_from(&path).unwrap();
		assert_eq!(loaded, config);

		let text = fs::read_to_string(&path).unwrap();
		assert!(text.contains("# Empty uses the default format (YYYY-[Q]Q)"));
	}

	#[test]
	fn partial_file_fills_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		fs::write(&path, "[month]\nenabled = true\nformat = \"YYYY/MMMM\"\n").unwrap();

		let config = Config::load_from(&path).unwrap();
		assert!(config.day.enabled);
		assert!(config.month.enabled);
		assert_eq!(config.month.format, "YYYY/MMMM");
		assert_eq!(config.calendar.week_start, WeekStart::Sunday);
		assert_eq!(config.vault.root, None);
	}

	#[test]
	fn rejects_illegal_formats() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		fs::write(&path, "[day]\nformat = \"YYYY:MM:DD\"\n").unwrap();

		let err = Config::load_from(&path).unwrap_err();
		assert!(format!("{err:#}").contains("Format contains illegal characters"));
	}

	#[test]
	fn vault_root_prefers_override() {
		let mut config = Config::default();
		assert_eq!(config.vault_root(None), None);
		config.vault.root = Some(PathBuf::from("/vault"));
		assert_eq!(config.vault_root(None), Some(PathBuf::from("/vault")));
		assert_eq!(config.vault_root(Some(Path::new("/other"))), Some(PathBuf::from("/other")));
	}
}
