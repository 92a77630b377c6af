//! Shared test helpers.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use webblocker::hosts::HostsEditor;
use webblocker::sites::SiteList;

/// Create a temp directory for hosts files and WEBBLOCKER_HOME.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("webblocker_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write a hosts file with the given content inside dir.
pub fn write_hosts(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    fs::write(&path, content).unwrap();
    path
}

/// Site list used throughout the tests.
pub fn sites(domains: &[&str]) -> SiteList {
    SiteList::new("127.0.0.1", domains.iter().map(|d| d.to_string()).collect())
}

pub fn editor(path: &Path, domains: &[&str]) -> HostsEditor {
    HostsEditor::new(path, sites(domains))
}
