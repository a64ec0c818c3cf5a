//! Recurring period units shared by the calendar, validators and config.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The unit of a recurring note period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
	Day,
	Week,
	Month,
	Quarter,
	Year,
}

impl Granularity {
	/// Every granularity, finest first.
	pub const ALL: [Self; 5] = [Self::Day, Self::Week, Self::Month, Self::Quarter, Self::Year];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Day => "day",
			Self::Week => "week",
			Self::Month => "month",
			Self::Quarter => "quarter",
			Self::Year => "year",
		}
	}

	/// Format used for new notes when none is configured.
	pub const fn default_format(self) -> &'static str {
		match self {
			Self::Day => "YYYY-MM-DD",
			Self::Week => "gggg-[W]ww",
			Self::Month => "YYYY-MM",
			Self::Quarter => "YYYY-[Q]Q",
			Self::Year => "YYYY",
		}
	}
}

impl fmt::Display for Granularity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
