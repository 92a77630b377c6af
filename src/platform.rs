//! Platform-specific locations.

use std::path::PathBuf;

/// Standard hosts file location for this platform.
#[cfg(unix)]
pub fn default_hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}

/// Standard hosts file location for this platform.
#[cfg(windows)]
pub fn default_hosts_path() -> PathBuf {
    let root = std::env::var_os("SystemRoot").unwrap_or_else(|| r"C:\Windows".into());
    PathBuf::from(root)
        .join("System32")
        .join("drivers")
        .join("etc")
        .join("hosts")
}
