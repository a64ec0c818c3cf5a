//! Acceptance check for a user-entered format string.

use super::filename::is_valid_filename;
use crate::{calendar::DateEngine, granularity::Granularity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
	/// The format could never be a filename.
	#[error("Format contains illegal characters")]
	IllegalCharacters,

	/// Today's date written with the format does not parse back.
	#[error("Failed to parse format")]
	Unparseable,
}

/// Validates `format` for notes of `granularity`.
///
/// An empty format is always accepted (the period type is switched off).
/// Only daily formats are round-tripped: they are the ones written at note
/// creation time, where characters the formatter treats specially would
/// otherwise produce files that can never be found again.
pub fn validate_format(engine: &impl DateEngine, format: &str, granularity: Granularity) -> Result<(), FormatError> {
	if format.is_empty() {
		return Ok(());
	}

	if !is_valid_filename(format) {
		return Err(FormatError::IllegalCharacters);
	}

	if granularity == Granularity::Day {
		let now = engine.now();
		let formatted = engine.format(now, format);
		if engine.parse_strict_at(&formatted, format, now).is_none() {
			return Err(FormatError::Unparseable);
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use chrono::{NaiveDate, NaiveDateTime};

	use super::*;
	use crate::calendar::{Clock, FixedClock, MomentEngine};

	fn engine() -> MomentEngine<FixedClock> {
		let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
		MomentEngine::new(FixedClock(now))
	}

	#[test]
	fn empty_format_is_always_valid() {
		for g in Granularity::ALL {
			assert_eq!(validate_format(&engine(), "", g), Ok(()));
		}
	}

	#[test]
	fn accepts_round_tripping_day_format() {
		assert_eq!(validate_format(&engine(), "YYYY-MM-DD", Granularity::Day), Ok(()));
		assert_eq!(validate_format(&engine(), "YYYY/MM/DD", Granularity::Day), Ok(()));
		assert_eq!(validate_format(&engine(), "dddd, MMMM Do YYYY", Granularity::Day), Ok(()));
	}

	#[test]
	fn reports_illegal_characters() {
		assert_eq!(validate_format(&engine(), "??", Granularity::Day), Err(FormatError::IllegalCharacters));
		assert_eq!(validate_format(&engine(), "YYYY:MM", Granularity::Month), Err(FormatError::IllegalCharacters));
		assert_eq!(validate_format(&engine(), "con", Granularity::Year), Err(FormatError::IllegalCharacters));
	}

	#[test]
	fn reports_formats_that_do_not_parse_back() {
		assert_eq!(validate_format(&engine(), "[Daily]", Granularity::Day), Err(FormatError::Unparseable));
		// "2024-315": `M` greedily reads "31" and leaves "5" for the day.
		assert_eq!(validate_format(&engine(), "YYYY-MD", Granularity::Day), Err(FormatError::Unparseable));
	}

	/// Moves forward by one second on every read.
	struct TickingClock(Cell<NaiveDateTime>);

	impl Clock for TickingClock {
		fn now(&self) -> NaiveDateTime {
			let now = self.0.get();
			self.0.set(now + chrono::Duration::seconds(1));
			now
		}
	}

	#[test]
	fn round_trip_reads_the_clock_once() {
		let last_second = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(23, 59, 59).unwrap();
		let engine = MomentEngine::new(TickingClock(Cell::new(last_second)));
		// "31" would not be a valid day in February.
		assert_eq!(validate_format(&engine, "DD", Granularity::Day), Ok(()));
	}

	#[test]
	fn coarser_granularities_skip_round_trip() {
		assert_eq!(validate_format(&engine(), "[Daily]", Granularity::Week), Ok(()));
		assert_eq!(validate_format(&engine(), "[Daily]", Granularity::Year), Ok(()));
	}

	#[test]
	fn messages_are_short_strings() {
		assert_eq!(FormatError::IllegalCharacters.to_string(), "Format contains illegal characters");
		assert_eq!(FormatError::Unparseable.to_string(), "Failed to parse format");
	}
}
