//! Checks that configured templates and folders exist in the vault.

use crate::vault::{Vault, normalize_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VaultCheckError {
	#[error("Template file not found")]
	TemplateNotFound,

	#[error("Folder not found in vault")]
	FolderNotFound,
}

/// An empty template means "no template"; anything else must resolve as a
/// link.
pub fn validate_template(vault: &impl Vault, template: &str) -> Result<(), VaultCheckError> {
	if template.is_empty() {
		return Ok(());
	}
	vault.resolve_link(template, "").map(|_| ()).ok_or(VaultCheckError::TemplateNotFound)
}

/// An empty folder or `/` is the vault root; anything else must exist.
pub fn validate_folder(vault: &impl Vault, folder: &str) -> Result<(), VaultCheckError> {
	if folder.is_empty() || folder == "/" {
		return Ok(());
	}
	vault.entry_at(&normalize_path(folder)).map(|_| ()).ok_or(VaultCheckError::FolderNotFound)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vault::VaultIndex;

	fn vault() -> VaultIndex { VaultIndex::from_paths(["Templates/Daily.md", "Journal/Daily/2024-03-15.md"]) }

	#[test]
	fn root_folder_is_always_valid() {
		let empty = VaultIndex::default();
		assert_eq!(validate_folder(&empty, "/"), Ok(()));
		assert_eq!(validate_folder(&empty, ""), Ok(()));
	}

	#[test]
	fn folder_must_exist() {
		let vault = vault();
		assert_eq!(validate_folder(&vault, "Journal/Daily"), Ok(()));
		assert_eq!(validate_folder(&vault, "/Journal//Daily/"), Ok(()));
		assert_eq!(validate_folder(&vault, "Journal/Weekly"), Err(VaultCheckError::FolderNotFound));
	}

	#[test]
	fn template_must_resolve() {
		let vault = vault();
		assert_eq!(validate_template(&vault, ""), Ok(()));
		assert_eq!(validate_template(&vault, "Templates/Daily"), Ok(()));
		assert_eq!(validate_template(&vault, "Daily"), Ok(()));
		assert_eq!(validate_template(&vault, "Weekly"), Err(VaultCheckError::TemplateNotFound));
		assert_eq!(VaultCheckError::TemplateNotFound.to_string(), "Template file not found");
		assert_eq!(VaultCheckError::FolderNotFound.to_string(), "Folder not found in vault");
	}
}
