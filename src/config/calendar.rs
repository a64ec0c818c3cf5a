use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// First day of locale weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
	#[default]
	Sunday,
	Monday,
	Tuesday,
	Wednesday,
	Thursday,
	Friday,
	Saturday,
}

impl WeekStart {
	pub const fn weekday(self) -> Weekday {
		match self {
			Self::Sunday => Weekday::Sun,
			Self::Monday => Weekday::Mon,
			Self::Tuesday => Weekday::Tue,
			Self::Wednesday => Weekday::Wed,
			Self::Thursday => Weekday::Thu,
			Self::Friday => Weekday::Fri,
			Self::Saturday => Weekday::Sat,
		}
	}
}

impl fmt::Display for WeekStart {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Sunday => "sunday",
			Self::Monday => "monday",
			Self::Tuesday => "tuesday",
			Self::Wednesday => "wednesday",
			Self::Thursday => "thursday",
			Self::Friday => "friday",
			Self::Saturday => "saturday",
		};
		f.write_str(name)
	}
}

/// Calendar-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
	/// First day of the week for week numbers and weekly notes
	#[serde(default)]
	pub week_start: WeekStart,
}
