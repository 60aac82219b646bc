//! Resolver configuration

use gitroot_fs::{ConfigStore, NormalizedPath, RepoPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings that shape a resolution. Passed explicitly to each
/// [`crate::Resolver`]; there is no global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Name of the marker entry probed at every directory level.
    pub marker_name: String,

    /// Honour `core.worktree` in a redirected metadata directory's config
    /// when deriving the working-tree root.
    pub follow_core_worktree: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            marker_name: RepoPath::GitDir.as_str().to_string(),
            follow_core_worktree: true,
        }
    }
}

impl ResolverConfig {
    /// Load and validate a config file (TOML, JSON or YAML by extension).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// The marker name must be a single, ordinary path segment.
    pub fn validate(&self) -> Result<()> {
        let name = self.marker_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::InvalidConfig {
                message: format!("marker_name must be a single path segment, got '{name}'"),
            });
        }
        Ok(())
    }
}
