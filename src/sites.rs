//! Site list: domains to block and the address they redirect to.

use std::fs;
use std::io::{self, Read, Write};
use std::net::IpAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BlockerError, Result};

/// Redirect address used when the site list does not name one.
pub const DEFAULT_REDIRECT: &str = "127.0.0.1";

/// Domain blocked when no site list file exists.
pub const DEFAULT_SITE: &str = "www.example.com";

/// Blocked domains (in write order) plus the redirect target (sites.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteList {
    #[serde(default = "default_redirect")]
    pub redirect: String,
    #[serde(default)]
    pub sites: Vec<String>,
}

fn default_redirect() -> String {
    DEFAULT_REDIRECT.to_string()
}

impl Default for SiteList {
    fn default() -> Self {
        Self {
            redirect: default_redirect(),
            sites: vec![DEFAULT_SITE.to_string()],
        }
    }
}

impl SiteList {
    pub fn new(redirect: impl Into<String>, sites: Vec<String>) -> Self {
        Self {
            redirect: redirect.into(),
            sites,
        }
    }

    /// Load site list from path, or the built-in default when the file is absent.
    /// Uses advisory lock when file exists.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no site list, using default");
            return Ok(SiteList::default());
        }
        let read_err = |source| BlockerError::Read {
            path: path.to_path_buf(),
            source,
        };
        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(read_err)?;
        fs2::FileExt::lock_shared(&file).map_err(read_err)?;
        let mut s = String::new();
        file.read_to_string(&mut s).map_err(read_err)?;

        let mut list: SiteList = toml::from_str(&s)
            .map_err(|e| BlockerError::InvalidSites(format!("{}: {e}", path.display())))?;
        list.normalize();
        list.validate()?;
        tracing::debug!(path = %path.display(), sites = list.sites.len(), "site list loaded");
        Ok(list)
    }

    /// Save site list to path. Uses advisory lock. Creates parent dirs if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut opts = fs::OpenOptions::new();
        opts.create(true).write(true).truncate(true);
        self.write_with(path, &opts).map(|_| ())
    }

    /// Save site list only if nothing exists at path yet. Returns false when
    /// the file was already there and has been left alone.
    pub fn create(&self, path: &Path) -> Result<bool> {
        let mut opts = fs::OpenOptions::new();
        opts.create_new(true).write(true);
        self.write_with(path, &opts)
    }

    fn write_with(&self, path: &Path, opts: &fs::OpenOptions) -> Result<bool> {
        let write_err = |source| BlockerError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(write_err)?;
        }
        let s = toml::to_string_pretty(self)
            .map_err(|e| BlockerError::InvalidSites(e.to_string()))?;
        let mut file = match opts.open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(write_err(e)),
        };
        fs2::FileExt::lock_exclusive(&file).map_err(write_err)?;
        file.write_all(s.as_bytes()).map_err(write_err)?;
        Ok(true)
    }

    /// Trim entries and drop empty ones. An empty domain would match every line.
    pub fn normalize(&mut self) {
        self.redirect = self.redirect.trim().to_string();
        for site in &mut self.sites {
            *site = site.trim().to_string();
        }
        self.sites.retain(|s| !s.is_empty());
    }

    /// Check the redirect is an IP address and every site a valid hostname.
    pub fn validate(&self) -> Result<()> {
        if self.redirect.parse::<IpAddr>().is_err() {
            return Err(BlockerError::InvalidSites(format!(
                "redirect {:?} is not an IP address",
                self.redirect
            )));
        }
        for site in &self.sites {
            validate_hostname(site)
                .map_err(|msg| BlockerError::InvalidSites(format!("{site:?}: {msg}")))?;
        }
        Ok(())
    }

    /// Hosts-file line for one site: `<redirect> <domain>`.
    pub fn redirect_line(&self, site: &str) -> String {
        format!("{} {site}", self.redirect)
    }

    /// One hosts-file line per site, in list order.
    pub fn redirect_lines(&self) -> Vec<String> {
        self.sites.iter().map(|s| self.redirect_line(s)).collect()
    }
}

/// Validate hostname format.
pub fn validate_hostname(domain: &str) -> std::result::Result<(), String> {
    if domain.is_empty() {
        return Err("empty hostname".into());
    }
    if domain.contains("..") {
        return Err("invalid hostname: consecutive dots".into());
    }
    for label in domain.split('.') {
        if label.is_empty() {
            return Err("invalid hostname: empty label".into());
        }
        for c in label.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(format!("invalid hostname: illegal char {c:?}"));
            }
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err("invalid hostname: label cannot start/end with hyphen".into());
        }
    }
    Ok(())
}
