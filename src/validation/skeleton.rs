//! Structural view of a format string with its literal text removed.

use std::sync::OnceLock;

use regex::Regex;

use crate::calendar::last_segment;

fn patterns() -> &'static (Regex, Regex) {
	static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
	PATTERNS.get_or_init(|| (Regex::new(r"\[[^\]]*\]").unwrap(), Regex::new(r"\\.").unwrap()))
}

/// Removes bracketed literals (`[...]`) and then backslash escapes (`\x`).
///
/// Brackets go first, so escapes inside a bracketed span disappear with it.
/// Unbalanced brackets are left in place as ordinary characters, as is a
/// trailing lone backslash.
pub fn remove_escaped_characters(format: &str) -> String {
	let (brackets, escapes) = patterns();
	let without_brackets = brackets.replace_all(format, "");
	escapes.replace_all(&without_brackets, "").into_owned()
}

/// Format for the last path segment a nested format renders, or the whole
/// format when it is not nested. A `/` kept as literal text still starts a
/// new folder on disk, so `[Log/]YYYY` gives `[]YYYY`.
pub fn get_basename(format: &str) -> String { last_segment(format) }

/// Number of folder levels a format describes, counting only separators
/// outside literal text.
pub fn nesting_level(format: &str) -> usize { remove_escaped_characters(format).matches('/').count() + 1 }
