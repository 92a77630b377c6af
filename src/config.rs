//! Path resolution for webblocker's own files.
//!
//! Supports WEBBLOCKER_HOME env var override for testing.

use std::path::{Path, PathBuf};

/// Paths for webblocker data.
#[derive(Debug, Clone)]
pub struct BlockerPaths {
    pub config_dir: PathBuf,
    pub sites_file: PathBuf,
}

impl BlockerPaths {
    /// Build paths from base directory (e.g. ProjectDirs config dir or WEBBLOCKER_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let sites_file = base.join("sites.toml");
        Self {
            config_dir: base,
            sites_file,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects WEBBLOCKER_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("WEBBLOCKER_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("", "", "webblocker") {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".webblocker")
        };
        Self::from_base(base)
    }
}

/// Path to sites.toml (respects WEBBLOCKER_HOME).
pub fn sites_path() -> PathBuf {
    BlockerPaths::default_paths().sites_file
}
