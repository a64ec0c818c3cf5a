//! Strict parsing of text against a tokenized format.
//!
//! Tokens are matched in order, anchored at the current position, and the
//! whole input must be consumed. Fields the format does not mention are
//! filled the way moment.js fills them: units larger than the largest parsed
//! unit come from today, smaller ones take their minimum.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::{
	tokens::{Item, MONTHS, MONTHS_SHORT, Token, WEEKDAYS, WEEKDAYS_MIN, WEEKDAYS_SHORT},
	week::WeekRule,
};

#[derive(Debug, Default)]
struct Fields {
	consumed:      bool,
	year:          Option<i32>,
	month:         Option<i64>,
	day:           Option<i64>,
	day_of_year:   Option<i64>,
	hour:          Option<i64>,
	twelve_hour:   bool,
	minute:        Option<i64>,
	second:        Option<i64>,
	pm:            Option<bool>,
	week_year:     Option<i32>,
	week:          Option<i64>,
	weekday:       Option<i64>,
	local_weekday: Option<i64>,
	iso_week_year: Option<i32>,
	iso_week:      Option<i64>,
	iso_weekday:   Option<i64>,
}

fn digits(input: &str, min: usize, max: usize) -> Option<(i64, &str)> {
	let len = input.bytes().take(max).take_while(u8::is_ascii_digit).count();
	if len < min {
		return None;
	}
	Some((input[..len].parse().ok()?, &input[len..]))
}

fn digits_no_leading_zero(input: &str, max: usize) -> Option<(i64, &str)> {
	if input.starts_with('0') {
		return None;
	}
	digits(input, 1, max)
}

/// Longest case-insensitive name at the start of `input`.
fn name<'a>(input: &'a str, names: &[&str]) -> Option<(i64, &'a str)> {
	names
		.iter()
		.enumerate()
		.filter(|(_, n)| input.get(..n.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(n)))
		.max_by_key(|(_, n)| n.len())
		.map(|(index, n)| (index as i64, &input[n.len()..]))
}

fn two_digit_year(value: i64) -> i32 {
	let value = value as i32;
	if value > 68 { 1900 + value } else { 2000 + value }
}

impl Fields {
	fn read<'a>(&mut self, token: Token, input: &'a str) -> Option<&'a str> {
		let rest = match token {
			Token::Year4 => {
				let (v, rest) = digits(input, 4, 4)?;
				self.year = Some(v as i32);
				rest
			}
			Token::Year2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.year = Some(two_digit_year(v));
				rest
			}
			Token::WeekYear4 => {
				let (v, rest) = digits(input, 4, 4)?;
				self.week_year = Some(v as i32);
				rest
			}
			Token::WeekYear2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.week_year = Some(two_digit_year(v));
				rest
			}
			Token::IsoWeekYear4 => {
				let (v, rest) = digits(input, 4, 4)?;
				self.iso_week_year = Some(v as i32);
				rest
			}
			Token::IsoWeekYear2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.iso_week_year = Some(two_digit_year(v));
				rest
			}
			Token::Quarter => {
				let (v, rest) = digits(input, 1, 1)?;
				self.month = Some((v - 1) * 3 + 1);
				rest
			}
			Token::MonthName => {
				let (index, rest) = name(input, &MONTHS)?;
				self.month = Some(index + 1);
				rest
			}
			Token::MonthShort => {
				let (index, rest) = name(input, &MONTHS_SHORT)?;
				self.month = Some(index + 1);
				rest
			}
			Token::Month2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.month = Some(v);
				rest
			}
			Token::Month => {
				let (v, rest) = digits_no_leading_zero(input, 2)?;
				self.month = Some(v);
				rest
			}
			Token::DayOfYear3 => {
				let (v, rest) = digits(input, 3, 3)?;
				self.day_of_year = Some(v);
				rest
			}
			Token::DayOfYear => {
				let (v, rest) = digits(input, 1, 3)?;
				self.day_of_year = Some(v);
				rest
			}
			Token::Day2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.day = Some(v);
				rest
			}
			Token::DayOrdinal => {
				let (v, rest) = digits(input, 1, 2)?;
				let rest = ["st", "nd", "rd", "th"].iter().find_map(|suffix| rest.strip_prefix(suffix))?;
				self.day = Some(v);
				rest
			}
			Token::Day => {
				let (v, rest) = digits_no_leading_zero(input, 2)?;
				self.day = Some(v);
				rest
			}
			Token::WeekdayName | Token::WeekdayShort | Token::WeekdayMin => {
				let names = match token {
					Token::WeekdayName => &WEEKDAYS,
					Token::WeekdayShort => &WEEKDAYS_SHORT,
					_ => &WEEKDAYS_MIN,
				};
				let (index, rest) = name(input, names)?;
				self.weekday = Some(index);
				rest
			}
			Token::Weekday => {
				let (v, rest) = digits(input, 1, 2)?;
				self.weekday = Some(v);
				rest
			}
			Token::LocaleWeekday => {
				let (v, rest) = digits(input, 1, 1)?;
				self.local_weekday = Some(v);
				rest
			}
			Token::IsoWeekday => {
				let (v, rest) = digits(input, 1, 1)?;
				self.iso_weekday = Some(v);
				rest
			}
			Token::Week2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.week = Some(v);
				rest
			}
			Token::Week => {
				let (v, rest) = digits_no_leading_zero(input, 2)?;
				self.week = Some(v);
				rest
			}
			Token::IsoWeek2 => {
				let (v, rest) = digits(input, 2, 2)?;
				self.iso_week = Some(v);
				rest
			}
			Token::IsoWeek => {
				let (v, rest) = digits_no_leading_zero(input, 2)?;
				self.iso_week = Some(v);
				rest
			}
			Token::Hour2 | Token::Hour => {
				let (v, rest) = if token == Token::Hour2 { digits(input, 2, 2)? } else { digits(input, 1, 2)? };
				self.hour = Some(v);
				rest
			}
			Token::Hour12Padded | Token::Hour12 => {
				let (v, rest) =
					if token == Token::Hour12Padded { digits(input, 2, 2)? } else { digits_no_leading_zero(input, 2)? };
				self.hour = Some(v);
				self.twelve_hour = true;
				rest
			}
			Token::Minute2 | Token::Minute => {
				let (v, rest) = if token == Token::Minute2 { digits(input, 2, 2)? } else { digits(input, 1, 2)? };
				self.minute = Some(v);
				rest
			}
			Token::Second2 | Token::Second => {
				let (v, rest) = if token == Token::Second2 { digits(input, 2, 2)? } else { digits(input, 1, 2)? };
				self.second = Some(v);
				rest
			}
			Token::MeridiemUpper | Token::MeridiemLower => {
				let (index, rest) = name(input, &["am", "pm"])?;
				self.pm = Some(index == 1);
				rest
			}
		};
		self.consumed = true;
		Some(rest)
	}

	fn has_week_info(&self) -> bool {
		self.week_year.is_some()
			|| self.week.is_some()
			|| self.weekday.is_some()
			|| self.local_weekday.is_some()
			|| self.has_iso_week_info()
	}

	fn has_iso_week_info(&self) -> bool {
		self.iso_week_year.is_some() || self.iso_week.is_some() || self.iso_weekday.is_some()
	}

	fn date_from_weeks(&self, today: NaiveDate, locale: WeekRule) -> Option<NaiveDate> {
		let (rule, week_year, week, weekday) = if self.has_iso_week_info() {
			let current = WeekRule::ISO.week_of_year(today);
			let weekday = self.iso_weekday.unwrap_or(1);
			if !(1..=7).contains(&weekday) {
				return None;
			}
			(WeekRule::ISO, self.iso_week_year.or(self.year).unwrap_or(current.0), self.iso_week.unwrap_or(1), weekday)
		} else {
			let current = locale.week_of_year(today);
			let weekday = match (self.weekday, self.local_weekday) {
				(Some(d), _) => d,
				(None, Some(e)) => e + locale.dow(),
				(None, None) => locale.dow(),
			};
			if self.weekday.is_some_and(|d| !(0..=6).contains(&d))
				|| self.local_weekday.is_some_and(|e| !(0..=6).contains(&e))
			{
				return None;
			}
			(locale, self.week_year.or(self.year).unwrap_or(current.0), self.week.unwrap_or(current.1), weekday)
		};

		if week < 1 || week > rule.weeks_in_year(week_year) {
			return None;
		}
		rule.date_from_week(week_year, week, weekday)
	}

	fn resolve(mut self, today: NaiveDate, locale: WeekRule) -> Option<NaiveDateTime> {
		if !self.consumed {
			return None;
		}

		if self.has_week_info() && self.day.is_none() && self.month.is_none() {
			let date = self.date_from_weeks(today, locale)?;
			self.year = Some(date.year());
			self.day_of_year = Some(i64::from(date.ordinal()));
		}

		if let Some(day_of_year) = self.day_of_year {
			let year = self.year.unwrap_or(today.year());
			let date = NaiveDate::from_yo_opt(year, u32::try_from(day_of_year).ok()?)?;
			self.year = Some(year);
			self.month = Some(i64::from(date.month()));
			self.day = Some(i64::from(date.day()));
		}

		// Default from today down to the first unit that was given.
		let mut from_today = self.year.is_none();
		let year = self.year.unwrap_or(today.year());
		let month = match self.month {
			Some(month) => {
				from_today = false;
				month
			}
			None if from_today => i64::from(today.month()),
			None => 1,
		};
		let day = match self.day {
			Some(day) => day,
			None if from_today => i64::from(today.day()),
			None => 1,
		};

		let mut hour = self.hour.unwrap_or(0);
		if self.twelve_hour && !(1..=12).contains(&hour) {
			return None;
		}
		match self.pm {
			Some(true) if hour < 12 => hour += 12,
			Some(false) if hour == 12 => hour = 0,
			_ => {}
		}

		let date = NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)?;
		if self.weekday.is_some_and(|d| d != i64::from(date.weekday().num_days_from_sunday())) {
			return None;
		}

		date.and_hms_opt(
			u32::try_from(hour).ok()?,
			u32::try_from(self.minute.unwrap_or(0)).ok()?,
			u32::try_from(self.second.unwrap_or(0)).ok()?,
		)
	}
}

/// Parses `text` against `items`, returning `None` unless the text matches
/// exactly and describes a real date and time.
pub fn parse_strict(text: &str, items: &[Item], today: NaiveDate, locale: WeekRule) -> Option<NaiveDateTime> {
	let mut fields = Fields::default();
	let mut rest = text;

	for item in items {
		rest = match item {
			Item::Literal(literal) => rest.strip_prefix(literal.as_str())?,
			Item::Token(token) => fields.read(*token, rest)?,
		};
	}

	if !rest.is_empty() {
		return None;
	}
	fields.resolve(today, locale)
}
