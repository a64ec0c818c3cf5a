//! Uniqueness probe for format strings.

use std::{collections::HashMap, fmt};

use serde::Serialize;
use tracing::debug;

use crate::{calendar::DateEngine, granularity::Granularity};

/// Number of consecutive periods checked for colliding names.
pub const PROBE_WINDOW: u32 = 1000;

/// How safely a format identifies periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
	/// Unique across the probe window and parses back.
	Valid,
	/// Two periods in the probe window share a name; the folder path is
	/// needed to tell them apart.
	FragileBasename,
	/// The start of the current period does not parse back at all.
	LooseParsing,
}

impl Complexity {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Valid => "valid",
			Self::FragileBasename => "fragile-basename",
			Self::LooseParsing => "loose-parsing",
		}
	}
}

impl fmt::Display for Complexity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Classifies `format` for notes of `granularity`.
///
/// Starting at the current period, formats the next [`PROBE_WINDOW`]
/// periods and reports the first repeated output. This bounds the search;
/// a format that passes may still repeat beyond the window.
pub fn validate_format_complexity(engine: &impl DateEngine, format: &str, granularity: Granularity) -> Complexity {
	let now = engine.now();
	let start = engine.start_of(now, granularity);
	let formatted = engine.format(start, format);
	if engine.parse_strict_at(&formatted, format, now).is_none() {
		return Complexity::LooseParsing;
	}

	let mut seen = HashMap::with_capacity(PROBE_WINDOW as usize + 1);
	seen.insert(formatted, start);

	let mut period = start;
	for _ in 0..PROBE_WINDOW {
		let Some(next) = engine.add(period, granularity, 1) else {
			break;
		};
		period = next;

		let formatted = engine.format(period, format);
		if let Some(earlier) = seen.get(&formatted) {
			debug!(
				%granularity,
				format,
				formatted = %formatted,
				first = %earlier,
				second = %period,
				"two periods produce the same name"
			);
			return Complexity::FragileBasename;
		}
		seen.insert(formatted, period);
	}

	Complexity::Valid
}
