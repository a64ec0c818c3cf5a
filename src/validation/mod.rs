//! Validation of periodic note settings and date inference for note files.
//!
//! - [`is_valid_filename`]: filename legality
//! - [`remove_escaped_characters`]: format skeleton without literal text
//! - [`validate_format`]: syntax and round-trip acceptance of a format
//! - [`validate_format_complexity`]: uniqueness probe over many periods
//! - [`get_date_input`]: the key to parse for an existing file
//! - [`validate_template`] and [`validate_folder`]: vault lookups

mod complexity;
mod date_input;
mod filename;
mod format;
mod skeleton;
mod vault;

use std::fmt::Display;

pub use complexity::{Complexity, PROBE_WINDOW, validate_format_complexity};
pub use date_input::{date_from_file, get_date_input};
pub use filename::is_valid_filename;
pub use format::{FormatError, validate_format};
pub use skeleton::{get_basename, nesting_level, remove_escaped_characters};
pub use vault::{VaultCheckError, validate_folder, validate_template};

/// Renders a validation result as a settings message: empty when valid,
/// otherwise the error text.
pub fn validation_message<E: Display>(result: &Result<(), E>) -> String {
	match result {
		Ok(()) => String::new(),
		Err(err) => err.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_follow_settings_convention() {
		assert_eq!(validation_message::<FormatError>(&Ok(())), "");
		assert_eq!(validation_message(&Err(FormatError::IllegalCharacters)), "Format contains illegal characters");
		assert_eq!(validation_message(&Err(VaultCheckError::FolderNotFound)), "Folder not found in vault");
	}
}
