//! Hosts file editing: insert, remove and list the marked block of redirects.
//!
//! The block looks like this and is appended to the end of the file:
//!
//! ```text
//!
//! # WEBBLOCKER START
//! 127.0.0.1 www.example.com
//! # WEBBLOCKER END
//! ```
//!
//! Sentinels match only as whole lines including the trailing `\n`.

use std::fs;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::backup;
use crate::error::{BlockerError, Result};
use crate::sites::SiteList;

pub const START_MARKER: &str = "# WEBBLOCKER START\n";
pub const END_MARKER: &str = "# WEBBLOCKER END\n";

/// Blank line written ahead of the start sentinel.
const SEPARATOR: &str = "\n";

/// Options shared by the mutating operations.
#[derive(Debug, Clone, Copy)]
pub struct EditOptions {
    /// Report what would change; never write or back up.
    pub dry_run: bool,
    /// Copy the file to `<path>.webblocker.bak` before writing.
    pub make_backup: bool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            make_backup: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Start sentinel already in the file; nothing written.
    AlreadyPresent,
    /// Dry run: the redirect lines that would be appended.
    Preview(Vec<String>),
    Inserted {
        entries: usize,
        backup: Option<PathBuf>,
    },
}

/// How `remove_block` chose the lines to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStrategy {
    /// Everything between (and including) the sentinels.
    Marked,
    /// No sentinel pair: every line containing a blocked domain.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Neither a marked block nor a matching line.
    NothingToRemove,
    /// Dry run: the lines that would be removed, without line endings.
    Preview {
        strategy: RemovalStrategy,
        lines: Vec<String>,
    },
    Removed {
        strategy: RemovalStrategy,
        lines: usize,
        backup: Option<PathBuf>,
    },
}

/// Split file content into lines, each keeping its `\n`.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Locate the first start sentinel and the first end sentinel after it.
/// A start without a matching end is not a block.
pub fn find_marked_block(lines: &[&str]) -> Option<RangeInclusive<usize>> {
    let start = lines.iter().position(|l| *l == START_MARKER)?;
    let end = lines[start + 1..]
        .iter()
        .position(|l| *l == END_MARKER)?
        + start
        + 1;
    Some(start..=end)
}

/// Text strictly between the sentinels, trimmed.
///
/// Unlike `find_marked_block` the sentinels are found as substrings, not
/// whole lines, so a listed block is not necessarily one `remove_block`
/// treats as marked.
pub fn block_text(content: &str) -> Option<&str> {
    let start = content.find(START_MARKER)? + START_MARKER.len();
    let end = content[start..].find(END_MARKER)? + start;
    Some(content[start..end].trim())
}

/// Edits one hosts file using a given site list.
#[derive(Debug, Clone)]
pub struct HostsEditor {
    path: PathBuf,
    sites: SiteList,
}

impl HostsEditor {
    pub fn new(path: impl Into<PathBuf>, sites: SiteList) -> Self {
        Self {
            path: path.into(),
            sites,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the marked block unless the start sentinel is already present.
    pub fn insert_block(&self, opts: EditOptions) -> Result<InsertOutcome> {
        let content = self.read()?;
        if content.contains(START_MARKER.trim_end()) {
            tracing::info!(path = %self.path.display(), "block section already present");
            return Ok(InsertOutcome::AlreadyPresent);
        }

        let lines = self.sites.redirect_lines();
        if opts.dry_run {
            return Ok(InsertOutcome::Preview(lines));
        }

        let backup = self.backup_if_requested(opts)?;

        let mut block = String::from(SEPARATOR);
        block.push_str(START_MARKER);
        for line in &lines {
            block.push_str(line);
            block.push('\n');
        }
        block.push_str(END_MARKER);

        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_err(e))?;
        file.write_all(block.as_bytes()).map_err(|e| self.write_err(e))?;
        tracing::info!(path = %self.path.display(), entries = lines.len(), "block section appended");

        Ok(InsertOutcome::Inserted {
            entries: lines.len(),
            backup,
        })
    }

    /// Remove the marked block, or failing that every line naming a blocked domain.
    pub fn remove_block(&self, opts: EditOptions) -> Result<RemoveOutcome> {
        let content = self.read()?;
        let lines = split_lines(&content);

        if let Some(range) = find_marked_block(&lines) {
            // Take the separator written by insert_block along with the block.
            let mut first = *range.start();
            if first > 0 && lines[first - 1] == SEPARATOR {
                first -= 1;
            }
            let last = *range.end();
            tracing::debug!(first, last, "marked block found");
            if opts.dry_run {
                return Ok(RemoveOutcome::Preview {
                    strategy: RemovalStrategy::Marked,
                    lines: display_lines(&lines[first..=last]),
                });
            }

            let mut kept = lines[..first].concat();
            kept.push_str(&lines[last + 1..].concat());

            let backup = self.backup_if_requested(opts)?;
            self.write(&kept)?;
            tracing::info!(path = %self.path.display(), lines = last + 1 - first, "marked block removed");
            return Ok(RemoveOutcome::Removed {
                strategy: RemovalStrategy::Marked,
                lines: last + 1 - first,
                backup,
            });
        }

        tracing::debug!("no marked block, falling back to hostname match");
        let (removed, kept): (Vec<&str>, Vec<&str>) =
            lines.into_iter().partition(|l| self.names_blocked_site(l));
        if removed.is_empty() {
            return Ok(RemoveOutcome::NothingToRemove);
        }
        if opts.dry_run {
            return Ok(RemoveOutcome::Preview {
                strategy: RemovalStrategy::Fallback,
                lines: display_lines(&removed),
            });
        }

        let backup = self.backup_if_requested(opts)?;
        self.write(&kept.concat())?;
        tracing::info!(path = %self.path.display(), lines = removed.len(), "matching host lines removed");
        Ok(RemoveOutcome::Removed {
            strategy: RemovalStrategy::Fallback,
            lines: removed.len(),
            backup,
        })
    }

    /// Current block contents, or None when there is no complete block section.
    pub fn list_blocked(&self) -> Result<Option<String>> {
        let content = self.read()?;
        Ok(block_text(&content).map(String::from))
    }

    /// Substring match, so `facebook.com` also hits `notfacebook.com`.
    fn names_blocked_site(&self, line: &str) -> bool {
        self.sites.sites.iter().any(|s| line.contains(s.as_str()))
    }

    fn backup_if_requested(&self, opts: EditOptions) -> Result<Option<PathBuf>> {
        if opts.make_backup && self.path.exists() {
            backup::create_backup(&self.path).map(Some)
        } else {
            Ok(None)
        }
    }

    fn read(&self) -> Result<String> {
        tracing::debug!(path = %self.path.display(), "reading hosts file");
        fs::read_to_string(&self.path).map_err(|source| BlockerError::Read {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| self.write_err(e))
    }

    fn write_err(&self, source: std::io::Error) -> BlockerError {
        BlockerError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

fn display_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.trim_end().to_string()).collect()
}
