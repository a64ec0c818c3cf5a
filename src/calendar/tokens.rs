//! Tokenizer for moment-style format strings.
//!
//! Text inside `[...]` and anything following a backslash is literal. Any
//! character that does not start a known token is literal as well, so
//! letters used in plain words (the `e` and `W` in `Week`) are still read as
//! tokens unless bracketed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
	Year4,
	Year2,
	WeekYear4,
	WeekYear2,
	IsoWeekYear4,
	IsoWeekYear2,
	Quarter,
	MonthName,
	MonthShort,
	Month2,
	Month,
	DayOfYear3,
	DayOfYear,
	Day2,
	DayOrdinal,
	Day,
	WeekdayName,
	WeekdayShort,
	WeekdayMin,
	Weekday,
	LocaleWeekday,
	IsoWeekday,
	Week2,
	Week,
	IsoWeek2,
	IsoWeek,
	Hour2,
	Hour,
	Hour12Padded,
	Hour12,
	Minute2,
	Minute,
	Second2,
	Second,
	MeridiemUpper,
	MeridiemLower,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
	Literal(String),
	Token(Token),
}

// Longer patterns precede their prefixes.
const TOKENS: &[(&str, Token)] = &[
	("YYYY", Token::Year4),
	("YY", Token::Year2),
	("gggg", Token::WeekYear4),
	("gg", Token::WeekYear2),
	("GGGG", Token::IsoWeekYear4),
	("GG", Token::IsoWeekYear2),
	("Q", Token::Quarter),
	("MMMM", Token::MonthName),
	("MMM", Token::MonthShort),
	("MM", Token::Month2),
	("M", Token::Month),
	("DDDD", Token::DayOfYear3),
	("DDD", Token::DayOfYear),
	("DD", Token::Day2),
	("Do", Token::DayOrdinal),
	("D", Token::Day),
	("dddd", Token::WeekdayName),
	("ddd", Token::WeekdayShort),
	("dd", Token::WeekdayMin),
	("d", Token::Weekday),
	("e", Token::LocaleWeekday),
	("E", Token::IsoWeekday),
	("ww", Token::Week2),
	("w", Token::Week),
	("WW", Token::IsoWeek2),
	("W", Token::IsoWeek),
	("HH", Token::Hour2),
	("H", Token::Hour),
	("hh", Token::Hour12Padded),
	("h", Token::Hour12),
	("mm", Token::Minute2),
	("m", Token::Minute),
	("ss", Token::Second2),
	("s", Token::Second),
	("A", Token::MeridiemUpper),
	("a", Token::MeridiemLower),
];

pub const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

pub const MONTHS_SHORT: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

pub const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

pub const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const WEEKDAYS_MIN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn match_token(input: &str) -> Option<(Token, usize)> {
	TOKENS.iter().find(|(pattern, _)| input.starts_with(pattern)).map(|(pattern, token)| (*token, pattern.len()))
}

/// Length of a bracketed literal at the start of `input`, brackets included.
/// The literal runs to the last `]` before the next `[`.
fn bracket_len(input: &str) -> Option<usize> {
	let body = &input[1..];
	let region = body.find('[').map_or(body, |next| &body[..next]);
	region.rfind(']').map(|close| close + 2)
}

fn push_literal(items: &mut Vec<Item>, text: &str) {
	if text.is_empty() {
		return;
	}
	if let Some(Item::Literal(last)) = items.last_mut() {
		last.push_str(text);
	} else {
		items.push(Item::Literal(text.to_string()));
	}
}

/// Splits a format string into literal runs and tokens.
pub fn tokenize(format: &str) -> Vec<Item> {
	let mut items = Vec::new();
	let mut rest = format;

	while let Some(c) = rest.chars().next() {
		if c == '[' {
			if let Some(len) = bracket_len(rest) {
				push_literal(&mut items, &rest[1..len - 1]);
				rest = &rest[len..];
				continue;
			}
		}

		if c == '\\' {
			let escaped = &rest[1..];
			if let Some(next) = escaped.chars().next() {
				// An escape covers a whole token, so `\YYYY` is the text "YYYY".
				let len = match_token(escaped).map_or(next.len_utf8(), |(_, len)| len);
				push_literal(&mut items, &escaped[..len]);
				rest = &escaped[len..];
				continue;
			}
		}

		if let Some((token, len)) = match_token(rest) {
			items.push(Item::Token(token));
			rest = &rest[len..];
		} else {
			push_literal(&mut items, &rest[..c.len_utf8()]);
			rest = &rest[c.len_utf8()..];
		}
	}

	items
}

/// Part of `format` that renders the text after the last `/` of its output.
///
/// A `/` inside a bracketed literal or behind a backslash still lands in the
/// rendered name, so a literal holding one is cut there and keeps its tail.
pub fn last_segment(format: &str) -> String {
	let mut segment = format.to_string();
	let mut rest = format;

	while let Some(c) = rest.chars().next() {
		if c == '[' {
			if let Some(len) = bracket_len(rest) {
				if let Some(slash) = rest[1..len - 1].rfind('/') {
					segment = format!("[{}", &rest[slash + 2..]);
				}
				rest = &rest[len..];
				continue;
			}
		}

		if c == '\\' {
			let escaped = &rest[1..];
			if let Some(next) = escaped.chars().next() {
				let len = match_token(escaped).map_or(next.len_utf8(), |(_, len)| len);
				rest = &escaped[len..];
				if next == '/' {
					segment = rest.to_string();
				}
				continue;
			}
		}

		let len = match_token(rest).map_or(c.len_utf8(), |(_, len)| len);
		rest = &rest[len..];
		if c == '/' {
			segment = rest.to_string();
		}
	}

	segment
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lit(text: &str) -> Item { Item::Literal(text.to_string()) }

	#[test]
	fn splits_tokens_and_separators() {
		assert_eq!(
			tokenize("YYYY-MM-DD"),
			vec![Item::Token(Token::Year4), lit("-"), Item::Token(Token::Month2), lit("-"), Item::Token(Token::Day2)]
		);
	}

	#[test]
	fn last_segment_cuts_at_rendered_separators() {
		assert_eq!(last_segment("YYYY/MM/DD"), "DD");
		assert_eq!(last_segment("YYYY-MM-DD"), "YYYY-MM-DD");
		assert_eq!(last_segment("[Log/]YYYY-MM-DD"), "[]YYYY-MM-DD");
		assert_eq!(last_segment("[Log/Daily ]YYYY"), "[Daily ]YYYY");
		assert_eq!(last_segment("YYYY\\/DD"), "DD");
		assert_eq!(last_segment("\\YYYY/[W]ww"), "[W]ww");
		assert_eq!(last_segment("YYYY/"), "");
	}

	#[test]
	fn brackets_and_escapes_are_literal() {
		assert_eq!(tokenize("gggg-[W]ww"), vec![
			Item::Token(Token::WeekYear4),
			lit("-W"),
			Item::Token(Token::Week2)
		]);
		assert_eq!(tokenize("\\YYYY"), vec![lit("YYYY")]);
		assert_eq!(tokenize("[a]b]"), vec![lit("a]b")]);
	}

	#[test]
	fn unmatched_bracket_is_plain_text() {
		assert_eq!(tokenize("[YYYY"), vec![lit("["), Item::Token(Token::Year4)]);
	}

	#[test]
	fn prefers_day_of_month_over_ordinal_prefix() {
		assert_eq!(tokenize("Do"), vec![Item::Token(Token::DayOrdinal)]);
		assert_eq!(tokenize("DDo"), vec![Item::Token(Token::Day2), lit("o")]);
	}
}
