//! Rendering of tokenized formats.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::{
	tokens::{Item, MONTHS, MONTHS_SHORT, Token, WEEKDAYS, WEEKDAYS_MIN, WEEKDAYS_SHORT},
	week::WeekRule,
};

/// English ordinal suffix for `n`.
pub fn ordinal_suffix(n: u32) -> &'static str {
	match (n % 10, n % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	}
}

pub fn render(items: &[Item], at: NaiveDateTime, locale: WeekRule) -> String {
	let mut out = String::new();
	for item in items {
		match item {
			Item::Literal(text) => out.push_str(text),
			Item::Token(token) => out.push_str(&render_token(*token, at, locale)),
		}
	}
	out
}

fn render_token(token: Token, at: NaiveDateTime, locale: WeekRule) -> String {
	let date = at.date();
	let weekday = date.weekday().num_days_from_sunday() as usize;
	let hour12 = match at.hour() % 12 {
		0 => 12,
		h => h,
	};

	match token {
		Token::Year4 => format!("{:04}", date.year()),
		Token::Year2 => format!("{:02}", date.year().rem_euclid(100)),
		Token::WeekYear4 => format!("{:04}", locale.week_of_year(date).0),
		Token::WeekYear2 => format!("{:02}", locale.week_of_year(date).0.rem_euclid(100)),
		Token::IsoWeekYear4 => format!("{:04}", WeekRule::ISO.week_of_year(date).0),
		Token::IsoWeekYear2 => format!("{:02}", WeekRule::ISO.week_of_year(date).0.rem_euclid(100)),
		Token::Quarter => (date.month0() / 3 + 1).to_string(),
		Token::MonthName => MONTHS[date.month0() as usize].to_string(),
		Token::MonthShort => MONTHS_SHORT[date.month0() as usize].to_string(),
		Token::Month2 => format!("{:02}", date.month()),
		Token::Month => date.month().to_string(),
		Token::DayOfYear3 => format!("{:03}", date.ordinal()),
		Token::DayOfYear => date.ordinal().to_string(),
		Token::Day2 => format!("{:02}", date.day()),
		Token::DayOrdinal => format!("{}{}", date.day(), ordinal_suffix(date.day())),
		Token::Day => date.day().to_string(),
		Token::WeekdayName => WEEKDAYS[weekday].to_string(),
		Token::WeekdayShort => WEEKDAYS_SHORT[weekday].to_string(),
		Token::WeekdayMin => WEEKDAYS_MIN[weekday].to_string(),
		Token::Weekday => weekday.to_string(),
		Token::LocaleWeekday => locale.local_weekday(date).to_string(),
		Token::IsoWeekday => date.weekday().number_from_monday().to_string(),
		Token::Week2 => format!("{:02}", locale.week_of_year(date).1),
		Token::Week => locale.week_of_year(date).1.to_string(),
		Token::IsoWeek2 => format!("{:02}", WeekRule::ISO.week_of_year(date).1),
		Token::IsoWeek => WeekRule::ISO.week_of_year(date).1.to_string(),
		Token::Hour2 => format!("{:02}", at.hour()),
		Token::Hour => at.hour().to_string(),
		Token::Hour12Padded => format!("{hour12:02}"),
		Token::Hour12 => hour12.to_string(),
		Token::Minute2 => format!("{:02}", at.minute()),
		Token::Minute => at.minute().to_string(),
		Token::Second2 => format!("{:02}", at.second()),
		Token::Second => at.second().to_string(),
		Token::MeridiemUpper => String::from(if at.hour() < 12 { "AM" } else { "PM" }),
		Token::MeridiemLower => String::from(if at.hour() < 12 { "am" } else { "pm" }),
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::calendar::tokens::tokenize;

	fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
	}

	fn fmt(format: &str, when: NaiveDateTime) -> String { render(&tokenize(format), when, WeekRule::default()) }

	#[test]
	fn renders_calendar_fields() {
		let when = at(2024, 3, 5, 14, 7, 9);
		assert_eq!(fmt("YYYY-MM-DD", when), "2024-03-05");
		assert_eq!(fmt("dddd, MMMM Do YYYY", when), "Tuesday, March 5th 2024");
		assert_eq!(fmt("ddd MMM D, YY", when), "Tue Mar 5, 24");
		assert_eq!(fmt("YYYY-[Q]Q", when), "2024-Q1");
		assert_eq!(fmt("DDDD", when), "065");
	}

	#[test]
	fn renders_unpadded_tokens() {
		let when = at(2023, 11, 2, 23, 4, 5);
		assert_eq!(fmt("YY Q MMMM MMM M DDD Do D dd e E w W", when), "23 4 November Nov 11 306 2nd 2 Th 4 4 44 44");
		assert_eq!(fmt("H h m s", when), "23 11 4 5");
	}

	#[test]
	fn renders_clock_fields() {
		assert_eq!(fmt("h:mm A", at(2024, 3, 5, 14, 7, 9)), "2:07 PM");
		assert_eq!(fmt("hh:mm:ss a", at(2024, 3, 5, 0, 0, 5)), "12:00:05 am");
		assert_eq!(fmt("HH:mm", at(2024, 3, 5, 9, 30, 0)), "09:30");
	}

	#[test]
	fn renders_week_fields() {
		// Sunday 2024-12-29 opens locale week 1 of 2025 but is ISO week 52 of 2024.
		let when = at(2024, 12, 29, 0, 0, 0);
		assert_eq!(fmt("gggg-[W]ww", when), "2025-W01");
		assert_eq!(fmt("GGGG-[W]WW", when), "2024-W52");
		assert_eq!(fmt("d e E", when), "0 0 7");
	}

	#[test]
	fn ordinal_suffixes() {
		let suffixes: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31].into_iter().map(ordinal_suffix).collect();
		assert_eq!(suffixes, ["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]);
	}
}
