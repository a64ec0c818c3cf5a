use std::path::Path;

use anyhow::Result;
use periodic_notes::{
	Granularity,
	config::Config,
	validation::{date_from_file, get_date_input},
	vault::{VaultFile, normalize_path},
};

use crate::utils::format_date_only;

/// Handles the resolve command - shows which period a note file represents
pub fn handle_resolve(
	config: &Config,
	vault_root: Option<&Path>,
	file: &str,
	granularity: Granularity,
	format: Option<&str>,
) -> Result<()> {
	let format = format.unwrap_or_else(|| config.period(granularity).effective_format(granularity));
	let engine = config.engine();
	let file = VaultFile::from_path(&vault_relative(vault_root, file));

	let input = get_date_input(&engine, &file, format, granularity);
	println!("Date input: {input}");

	match date_from_file(&engine, &file, format, granularity) {
		Some(date) => println!("{granularity} note for {}", format_date_only(&date)),
		None => anyhow::bail!("'{}' does not match the {granularity} format '{format}'", file.path),
	}
	Ok(())
}

/// Path of `file` inside the vault when it lies under `root`, otherwise the
/// path as given. Always normalized.
fn vault_relative(root: Option<&Path>, file: &str) -> String {
	let path = Path::new(file);
	let relative = root.and_then(|root| path.strip_prefix(root).ok()).unwrap_or(path);
	normalize_path(&relative.to_string_lossy())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_vault_root() {
		let root = Path::new("/home/me/Notes");
		assert_eq!(vault_relative(Some(root), "/home/me/Notes/Daily/2024-03-15.md"), "Daily/2024-03-15.md");
		assert_eq!(vault_relative(Some(root), "Daily/2024-03-15.md"), "Daily/2024-03-15.md");
		assert_eq!(vault_relative(None, "/Daily//2024-03-15.md"), "Daily/2024-03-15.md");
	}
}
