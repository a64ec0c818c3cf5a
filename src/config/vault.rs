use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Vault location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
	/// Root folder of the vault (overridden by --vault)
	#[serde(default)]
	pub root: Option<PathBuf>,
}
