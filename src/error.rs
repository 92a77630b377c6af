//! Error taxonomy for hosts-file editing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockerError {
    /// Target hosts file does not exist. Reported with exit code 2.
    #[error("Hosts path does not exist: {}", .0.display())]
    HostsNotFound(PathBuf),

    #[error("read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backup copy failed; nothing was modified.
    #[error("backup {} -> {}", path.display(), backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid site list: {0}")]
    InvalidSites(String),
}

impl BlockerError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BlockerError::HostsNotFound(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlockerError>;
