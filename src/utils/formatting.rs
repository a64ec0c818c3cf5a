//! Date formatting for command output.

use chrono::NaiveDate;

/// Date format constants for consistent formatting across the application.
pub mod date_formats {
	/// Date only format: "2024-01-15"
	pub const DATE_ONLY: &str = "%Y-%m-%d";
}

/// Formats a date without time.
/// Returns: "2024-01-15"
pub fn format_date_only(date: &NaiveDate) -> String { date.format(date_formats::DATE_ONLY).to_string() }
