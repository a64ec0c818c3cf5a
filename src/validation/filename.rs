//! Filename legality on the most restrictive supported filesystem.

use std::sync::OnceLock;

use regex::Regex;

fn patterns() -> &'static FilenamePatterns {
	static PATTERNS: OnceLock<FilenamePatterns> = OnceLock::new();
	PATTERNS.get_or_init(FilenamePatterns::new)
}

struct FilenamePatterns {
	illegal:          Regex,
	control:          Regex,
	dots_only:        Regex,
	windows_reserved: Regex,
}

impl FilenamePatterns {
	fn new() -> Self {
		Self {
			illegal:          Regex::new(r#"[?<>\\:*|"]"#).unwrap(),
			// C0 and C1 control characters
			control:          Regex::new(r"[\x00-\x1f\x80-\x9f]").unwrap(),
			dots_only:        Regex::new(r"^\.+$").unwrap(),
			// Windows device names, with or without an extension
			windows_reserved: Regex::new(r"(?i)^(con|prn|aux|nul|com[0-9]|lpt[0-9])(\..*)?$").unwrap(),
		}
	}
}

/// Returns whether `filename` (a name, not a path) is legal everywhere notes
/// may be synced to.
pub fn is_valid_filename(filename: &str) -> bool {
	let p = patterns();
	!p.illegal.is_match(filename)
		&& !p.control.is_match(filename)
		&& !p.dots_only.is_match(filename)
		&& !p.windows_reserved.is_match(filename)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_ordinary_names() {
		for name in ["2024-03-15", "Week 11", "YYYY-MM-DD", "gggg-[W]ww", "YYYY/MM/DD", "console", "com10", ".env"] {
			assert!(is_valid_filename(name), "{name}");
		}
	}

	#[test]
	fn rejects_reserved_characters() {
		for c in ['?', '<', '>', '\\', ':', '*', '|', '"'] {
			assert!(!is_valid_filename(&format!("YYYY{c}MM")), "{c}");
			assert!(!is_valid_filename(&c.to_string()), "{c}");
		}
	}

	#[test]
	fn rejects_control_characters() {
		assert!(!is_valid_filename("YYYY\u{0000}"));
		assert!(!is_valid_filename("line\nbreak"));
		assert!(!is_valid_filename("tab\there"));
		assert!(!is_valid_filename("c1\u{0085}"));
		assert!(!is_valid_filename("c1\u{009f}"));
		assert!(is_valid_filename("latin\u{00a0}space"));
	}

	#[test]
	fn rejects_dot_only_names() {
		assert!(!is_valid_filename("."));
		assert!(!is_valid_filename(".."));
		assert!(!is_valid_filename("....."));
		assert!(is_valid_filename("..notes"));
	}

	#[test]
	fn rejects_windows_device_names() {
		for name in ["con", "CON", "Prn", "aux.md", "NUL.txt", "com0", "COM9.log", "lpt1", "Lpt5.tar.gz"] {
			assert!(!is_valid_filename(name), "{name}");
		}
	}
}
