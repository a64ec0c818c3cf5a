//! In-memory vault index, built from a path list or a directory scan.

use std::{
	collections::{BTreeMap, BTreeSet},
	fs,
	path::Path,
};

use anyhow::{Context, Result};
use tracing::debug;

use super::{Vault, VaultEntry, VaultFile, normalize_path};

/// Immutable snapshot of the files and folders in a vault.
#[derive(Debug, Clone, Default)]
pub struct VaultIndex {
	files:   BTreeMap<String, VaultFile>,
	folders: BTreeSet<String>,
}

impl VaultIndex {
	/// Builds an index from vault-relative file paths. Parent folders are
	/// registered implicitly.
	pub fn from_paths<I, S>(paths: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut index = Self::default();
		for path in paths {
			index.insert_file(&normalize_path(path.as_ref()));
		}
		index
	}

	/// Scans `root` recursively. Entries whose name starts with a dot (such
	/// as `.obsidian` or `.git`) are skipped.
	pub fn scan(root: &Path) -> Result<Self> {
		let mut index = Self::default();
		index.scan_dir(root, "")?;
		debug!(root = %root.display(), files = index.files.len(), folders = index.folders.len(), "scanned vault");
		Ok(index)
	}

	fn scan_dir(&mut self, dir: &Path, prefix: &str) -> Result<()> {
		let entries = fs::read_dir(dir).with_context(|| format!("Failed to read vault folder {}", dir.display()))?;

		for entry in entries {
			let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
			let name = entry.file_name().to_string_lossy().into_owned();
			if name.starts_with('.') {
				continue;
			}

			let path = if prefix.is_empty() { name } else { format!("{prefix}/{name}") };
			let file_type = entry.file_type().with_context(|| format!("Failed to stat {path}"))?;
			if file_type.is_dir() {
				self.folders.insert(path.clone());
				self.scan_dir(&entry.path(), &path)?;
			} else {
				self.insert_file(&path);
			}
		}
		Ok(())
	}

	fn insert_file(&mut self, path: &str) {
		let mut parent = path;
		while let Some((folder, _)) = parent.rsplit_once('/') {
			self.folders.insert(folder.to_string());
			parent = folder;
		}
		self.files.insert(path.to_string(), VaultFile::from_path(path));
	}

	pub fn files(&self) -> impl Iterator<Item = &VaultFile> { self.files.values() }

	pub fn file(&self, path: &str) -> Option<&VaultFile> { self.files.get(path) }

	pub fn is_empty(&self) -> bool { self.files.is_empty() && self.folders.is_empty() }
}

/// Strips a `#heading` or `^block` subpath from a link target.
fn link_target(link: &str) -> &str { link.split(['#', '^']).next().unwrap_or(link).trim() }

impl Vault for VaultIndex {
	fn resolve_link(&self, link: &str, source_path: &str) -> Option<&VaultFile> {
		let target = normalize_path(link_target(link));
		if target == "/" {
			return None;
		}
		let has_extension = !VaultFile::from_path(&target).extension.is_empty();
		let wanted = if has_extension { target } else { format!("{target}.md") };

		if let Some(file) = self.files.get(&wanted) {
			return Some(file);
		}

		let source_folder = VaultFile::from_path(source_path).parent().to_string();
		let suffix = format!("/{wanted}");
		self.files
			.values()
			.filter(|file| file.path.ends_with(&suffix))
			.min_by_key(|file| (file.parent() != source_folder, file.path.matches('/').count(), file.path.clone()))
	}

	fn entry_at(&self, path: &str) -> Option<VaultEntry<'_>> {
		if path == "/" {
			return Some(VaultEntry::Folder("/"));
		}
		if let Some(file) = self.files.get(path) {
			return Some(VaultEntry::File(file));
		}
		self.folders.get(path).map(|folder| VaultEntry::Folder(folder.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> VaultIndex {
		VaultIndex::from_paths([
			"Templates/Daily.md",
			"Archive/Templates/Daily.md",
			"Journal/2024/03/15.md",
			"Inbox.md",
			"Assets/logo.png",
		])
	}

	#[test]
	fn resolves_links_by_path_then_name() {
		let vault = sample();
		assert_eq!(vault.resolve_link("Inbox", "").map(|f| f.path.as_str()), Some("Inbox.md"));
		assert_eq!(vault.resolve_link("Templates/Daily", "").map(|f| f.path.as_str()), Some("Templates/Daily.md"));
		assert_eq!(vault.resolve_link("Daily", "").map(|f| f.path.as_str()), Some("Templates/Daily.md"));
		assert_eq!(vault.resolve_link("logo.png", "").map(|f| f.path.as_str()), Some("Assets/logo.png"));
		assert_eq!(vault.resolve_link("Inbox#Today", "").map(|f| f.path.as_str()), Some("Inbox.md"));
		assert!(vault.resolve_link("Missing", "").is_none());
		assert!(vault.resolve_link("", "").is_none());
	}

	#[test]
	fn prefers_links_next_to_source() {
		let vault = sample();
		let file = vault.resolve_link("Daily", "Archive/Templates/Index.md");
		assert_eq!(file.map(|f| f.path.as_str()), Some("Archive/Templates/Daily.md"));
	}

	#[test]
	fn looks_up_files_and_implied_folders() {
		let vault = sample();
		assert!(matches!(vault.entry_at("Journal/2024"), Some(VaultEntry::Folder("Journal/2024"))));
		assert!(matches!(vault.entry_at("Inbox.md"), Some(VaultEntry::File(_))));
		assert!(matches!(vault.entry_at("/"), Some(VaultEntry::Folder("/"))));
		assert!(vault.entry_at("Journal/2023").is_none());
	}

	#[test]
	fn scans_directories_skipping_dot_entries() {
		let dir = tempfile::tempdir().unwrap();
		fs::create_dir_all(dir.path().join("Daily/2024")).unwrap();
		fs::create_dir_all(dir.path().join(".obsidian")).unwrap();
		fs::create_dir_all(dir.path().join("Empty")).unwrap();
		fs::write(dir.path().join("Daily/2024/2024-03-15.md"), "# Friday").unwrap();
		fs::write(dir.path().join(".obsidian/app.json"), "{}").unwrap();

		let vault = VaultIndex::scan(dir.path()).unwrap();
		assert!(vault.file("Daily/2024/2024-03-15.md").is_some());
		assert!(matches!(vault.entry_at("Empty"), Some(VaultEntry::Folder(_))));
		assert!(vault.entry_at(".obsidian").is_none());
		assert_eq!(vault.files().count(), 1);
	}

	#[test]
	fn fresh_vault_folder_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		fs::create_dir_all(dir.path().join(".obsidian")).unwrap();
		assert!(VaultIndex::scan(dir.path()).unwrap().is_empty());
		assert!(!sample().is_empty());
	}

	#[test]
	fn scanning_a_missing_folder_fails() {
		let dir = tempfile::tempdir().unwrap();
		assert!(VaultIndex::scan(&dir.path().join("nope")).is_err());
	}
}
