//! Picks the text to hand to the date parser for an existing note file.

use chrono::NaiveDate;

use super::{
	complexity::{Complexity, validate_format_complexity},
	skeleton::{get_basename, nesting_level},
};
use crate::{calendar::DateEngine, granularity::Granularity, vault::VaultFile};

/// Returns the key to parse for `file` under `format`.
///
/// For fragile formats the bare name is ambiguous, so the key is rebuilt from
/// as many trailing path segments as the format has folder levels (a file at
/// `notes/2024/03/15.md` under `YYYY/MM/DD` gives `2024/03/15`). This
/// assumes the folders on disk mirror the separators in the format.
/// Otherwise the file's basename is returned as is.
pub fn get_date_input(engine: &impl DateEngine, file: &VaultFile, format: &str, granularity: Granularity) -> String {
	if validate_format_complexity(engine, format, granularity) != Complexity::FragileBasename {
		return file.basename.clone();
	}

	let levels = nesting_level(format);
	let segments: Vec<&str> = file.path_without_extension().split('/').collect();
	segments[segments.len().saturating_sub(levels)..].join("/")
}

/// Date of the period `file` represents, if its name matches `format`.
pub fn date_from_file(
	engine: &impl DateEngine,
	file: &VaultFile,
	format: &str,
	granularity: Granularity,
) -> Option<NaiveDate> {
	let input = get_date_input(engine, file, format, granularity);
	let parsed = if input.contains('/') {
		engine.parse_strict(&input, format)
	} else {
		engine.parse_strict(&input, &get_basename(format))
	};
	parsed.map(|at| at.date())
}
