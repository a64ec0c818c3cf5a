//! Vault abstraction: the note files the validators look things up in.
//!
//! Paths are vault-relative, use `/` as separator and never start or end
//! with a slash; the vault root itself is `/`.

mod index;

pub use index::VaultIndex;

/// A file in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
	/// Vault-relative path including the extension.
	pub path:      String,
	/// File name without directory or extension.
	pub basename:  String,
	/// Extension without the dot, empty when the name has none.
	pub extension: String,
}

impl VaultFile {
	pub fn from_path(path: &str) -> Self {
		let name = path.rsplit('/').next().unwrap_or(path);
		let (basename, extension) = match name.rfind('.') {
			Some(dot) if dot > 0 => (&name[..dot], &name[dot + 1..]),
			_ => (name, ""),
		};
		Self { path: path.to_string(), basename: basename.to_string(), extension: extension.to_string() }
	}

	/// Folder holding the file, `/` at the vault root.
	pub fn parent(&self) -> &str { self.path.rsplit_once('/').map_or("/", |(parent, _)| parent) }

	/// Full path with the extension cut off; unchanged when there is none.
	pub fn path_without_extension(&self) -> &str {
		if self.extension.is_empty() {
			&self.path
		} else {
			&self.path[..self.path.len() - self.extension.len() - 1]
		}
	}
}

/// Anything a path can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultEntry<'a> {
	File(&'a VaultFile),
	Folder(&'a str),
}

/// Lookups the folder and template validators need.
pub trait Vault {
	/// Resolves a wiki-link target as seen from `source_path` (may be empty).
	fn resolve_link(&self, link: &str, source_path: &str) -> Option<&VaultFile>;

	/// Looks up a normalized path.
	fn entry_at(&self, path: &str) -> Option<VaultEntry<'_>>;
}

/// Normalizes a user-entered path: runs of `/` or `\` become one `/`,
/// leading and trailing slashes are dropped, non-breaking spaces become
/// plain spaces. An empty result is the root, `/`.
pub fn normalize_path(path: &str) -> String {
	let mut out = String::with_capacity(path.len());
	let mut pending_slash = false;

	for c in path.chars() {
		match c {
			'/' | '\\' => pending_slash = true,
			c => {
				if pending_slash && !out.is_empty() {
					out.push('/');
				}
				pending_slash = false;
				out.push(if matches!(c, '\u{00A0}' | '\u{202F}') { ' ' } else { c });
			}
		}
	}

	if out.is_empty() { "/".to_string() } else { out }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_name_parts() {
		let file = VaultFile::from_path("journal/2024/03/15.md");
		assert_eq!(file.basename, "15");
		assert_eq!(file.extension, "md");
		assert_eq!(file.parent(), "journal/2024/03");
		assert_eq!(file.path_without_extension(), "journal/2024/03/15");
	}

	#[test]
	fn tolerates_missing_extension() {
		let file = VaultFile::from_path("Daily/2024-03-15");
		assert_eq!(file.basename, "2024-03-15");
		assert_eq!(file.extension, "");
		assert_eq!(file.path_without_extension(), "Daily/2024-03-15");

		let dotfile = VaultFile::from_path(".hidden");
		assert_eq!(dotfile.basename, ".hidden");
		assert_eq!(dotfile.parent(), "/");
	}

	#[test]
	fn normalizes_paths() {
		assert_eq!(normalize_path("/Daily Notes/"), "Daily Notes");
		assert_eq!(normalize_path("a//b\\\\c"), "a/b/c");
		assert_eq!(normalize_path("Periodic\u{00A0}Notes"), "Periodic Notes");
		assert_eq!(normalize_path(""), "/");
		assert_eq!(normalize_path("///"), "/");
	}
}
