//! Single-slot backup of the hosts file before a write.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{BlockerError, Result};

/// Suffix appended to the hosts path for the backup copy.
pub const BACKUP_SUFFIX: &str = ".webblocker.bak";

/// Backup location for a hosts file: `<path>.webblocker.bak`.
pub fn backup_path(hosts_path: &Path) -> PathBuf {
    let mut s = OsString::from(hosts_path.as_os_str());
    s.push(BACKUP_SUFFIX);
    PathBuf::from(s)
}

/// Copy hosts file byte-for-byte to its backup path, overwriting any previous backup.
pub fn create_backup(hosts_path: &Path) -> Result<PathBuf> {
    let bak = backup_path(hosts_path);
    std::fs::copy(hosts_path, &bak).map_err(|source| BlockerError::Backup {
        path: hosts_path.to_path_buf(),
        backup: bak.clone(),
        source,
    })?;
    tracing::info!(backup = %bak.display(), "backup created");
    Ok(bak)
}
