//! Week numbering rules.
//!
//! A rule is the pair (first day of the week, day of January that always
//! falls in week 1), expressed the way moment.js locales express it: `dow`
//! counts from Sunday = 0 and `doy` is `7 + dow - janX`.

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRule {
	dow: i64,
	doy: i64,
}

impl WeekRule {
	/// ISO-8601: weeks start on Monday and January 4th is in week 1.
	pub const ISO: Self = Self { dow: 1, doy: 4 };

	/// Locale weeks starting on `first_day`, with January 1st always in week 1.
	pub fn starting_on(first_day: Weekday) -> Self {
		let dow = i64::from(first_day.num_days_from_sunday());
		Self { dow, doy: 6 + dow }
	}

	/// Weekday number (Sunday = 0) on which weeks start.
	pub const fn dow(self) -> i64 { self.dow }

	fn first_week_offset(self, year: i32) -> i64 {
		let fwd = 7 + self.dow - self.doy;
		let fwd_weekday = (jan1_weekday(year) + fwd - 1).rem_euclid(7);
		let fwdlw = (7 + fwd_weekday - self.dow).rem_euclid(7);
		-fwdlw + fwd - 1
	}

	pub fn weeks_in_year(self, year: i32) -> i64 {
		let offset = self.first_week_offset(year);
		let offset_next = self.first_week_offset(year + 1);
		(days_in_year(year) - offset + offset_next) / 7
	}

	/// Returns `(week_year, week)` for `date`.
	pub fn week_of_year(self, date: NaiveDate) -> (i32, i64) {
		let year = date.year();
		let week = (i64::from(date.ordinal()) - self.first_week_offset(year) - 1).div_euclid(7) + 1;

		if week < 1 {
			let prev = year - 1;
			(prev, week + self.weeks_in_year(prev))
		} else if week > self.weeks_in_year(year) {
			(year + 1, week - self.weeks_in_year(year))
		} else {
			(year, week)
		}
	}

	/// Weekday of `date` counted from the rule's first day (0-6).
	pub fn local_weekday(self, date: NaiveDate) -> i64 {
		(i64::from(date.weekday().num_days_from_sunday()) - self.dow).rem_euclid(7)
	}

	/// Date of `weekday` (Sunday = 0, values up to 12 wrap) in `week` of
	/// `week_year`.
	pub fn date_from_week(self, week_year: i32, week: i64, weekday: i64) -> Option<NaiveDate> {
		let local_weekday = (7 + weekday - self.dow).rem_euclid(7);
		let day_of_year = 1 + 7 * (week - 1) + local_weekday + self.first_week_offset(week_year);

		let (year, ordinal) = if day_of_year <= 0 {
			let prev = week_year - 1;
			(prev, days_in_year(prev) + day_of_year)
		} else if day_of_year > days_in_year(week_year) {
			(week_year + 1, day_of_year - days_in_year(week_year))
		} else {
			(week_year, day_of_year)
		};

		NaiveDate::from_yo_opt(year, u32::try_from(ordinal).ok()?)
	}
}

impl Default for WeekRule {
	fn default() -> Self { Self::starting_on(Weekday::Sun) }
}

pub(crate) const fn is_leap_year(year: i32) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

pub(crate) const fn days_in_year(year: i32) -> i64 {
	if is_leap_year(year) { 366 } else { 365 }
}

// Gauss's algorithm, Sunday = 0.
fn jan1_weekday(year: i32) -> i64 {
	let y = i64::from(year) - 1;
	(1 + 5 * y.rem_euclid(4) + 4 * y.rem_euclid(100) + 6 * y.rem_euclid(400)).rem_euclid(7)
}
