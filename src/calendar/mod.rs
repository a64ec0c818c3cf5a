//! Date-formatting capability used by the validators.
//!
//! The validators only see the [`DateEngine`] trait. [`MomentEngine`] is the
//! concrete implementation: it understands moment.js format strings
//! (English locale) and computes on chrono's naive date-times, reading the
//! current time from an injected [`Clock`].

mod format;
mod parse;
mod period;
mod tokens;
mod week;

use chrono::{Local, NaiveDateTime, Weekday};
pub use tokens::last_segment;
pub use week::WeekRule;

use crate::granularity::Granularity;

/// Source of the current wall-clock time.
pub trait Clock {
	fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> NaiveDateTime { Local::now().naive_local() }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
	fn now(&self) -> NaiveDateTime { self.0 }
}

/// Formatting, strict parsing and period arithmetic over format strings.
pub trait DateEngine {
	/// Current time. Validators call this once per check.
	fn now(&self) -> NaiveDateTime;

	fn format(&self, at: NaiveDateTime, format: &str) -> String;

	/// Parses `text` with `format` in strict mode, `None` when the text does
	/// not describe a valid point in time under that format. Units the format
	/// leaves out are filled in from `now`.
	fn parse_strict_at(&self, text: &str, format: &str, now: NaiveDateTime) -> Option<NaiveDateTime>;

	/// [`DateEngine::parse_strict_at`] against a fresh reading of the clock.
	fn parse_strict(&self, text: &str, format: &str) -> Option<NaiveDateTime> {
		self.parse_strict_at(text, format, self.now())
	}

	/// Start of the period of `granularity` containing `at`.
	fn start_of(&self, at: NaiveDateTime, granularity: Granularity) -> NaiveDateTime;

	/// Moves `at` by `count` periods, `None` when the result is out of range.
	fn add(&self, at: NaiveDateTime, granularity: Granularity, count: i32) -> Option<NaiveDateTime>;
}

/// moment.js-compatible engine.
#[derive(Debug, Clone)]
pub struct MomentEngine<C> {
	clock:  C,
	locale: WeekRule,
}

impl<C: Clock> MomentEngine<C> {
	/// Engine with Sunday-start locale weeks.
	pub fn new(clock: C) -> Self { Self { clock, locale: WeekRule::default() } }

	/// Sets the first day of locale weeks (`w`, `gggg`, `e` and week periods).
	#[must_use]
	pub fn with_week_start(mut self, first_day: Weekday) -> Self {
		self.locale = WeekRule::starting_on(first_day);
		self
	}
}

impl MomentEngine<SystemClock> {
	pub fn system() -> Self { Self::new(SystemClock) }
}

impl<C: Clock> DateEngine for MomentEngine<C> {
	fn now(&self) -> NaiveDateTime { self.clock.now() }

	fn format(&self, at: NaiveDateTime, format: &str) -> String { format::render(&tokens::tokenize(format), at, self.locale) }

	fn parse_strict_at(&self, text: &str, format: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
		parse::parse_strict(text, &tokens::tokenize(format), now.date(), self.locale)
	}

	fn start_of(&self, at: NaiveDateTime, granularity: Granularity) -> NaiveDateTime {
		period::start_of(at, granularity, self.locale)
	}

	fn add(&self, at: NaiveDateTime, granularity: Granularity, count: i32) -> Option<NaiveDateTime> {
		period::add(at, granularity, count)
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	fn engine() -> MomentEngine<FixedClock> {
		let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
		MomentEngine::new(FixedClock(now))
	}

	#[test]
	fn round_trips_default_formats() {
		let engine = engine();
		for g in Granularity::ALL {
			let start = engine.start_of(engine.now(), g);
			let text = engine.format(start, g.default_format());
			assert_eq!(engine.parse_strict(&text, g.default_format()), Some(start), "{g}: {text}");
		}
	}

	#[test]
	fn week_start_changes_locale_weeks() {
		let engine = engine().with_week_start(Weekday::Mon);
		let start = engine.start_of(engine.now(), Granularity::Week);
		assert_eq!(start.date(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
		assert_eq!(engine.format(start, "gggg-[W]ww e"), "2024-W11 0");
	}
}
