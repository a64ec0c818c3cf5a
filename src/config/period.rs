use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;

/// Settings for one kind of periodic note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
	/// Whether notes of this period are in use
	#[serde(default)]
	pub enabled: bool,

	/// Filename format; empty uses the period's default format
	#[serde(default)]
	pub format: String,

	/// Folder new notes are placed in; empty or "/" is the vault root
	#[serde(default)]
	pub folder: String,

	/// Link to the template note; empty for none
	#[serde(default)]
	pub template: String,
}

impl PeriodConfig {
	pub fn enabled() -> Self { Self { enabled: true, ..Self::default() } }

	/// Format actually used for `granularity`.
	pub fn effective_format(&self, granularity: Granularity) -> &str {
		if self.format.is_empty() { granularity.default_format() } else { &self.format }
	}
}
