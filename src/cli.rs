//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, CommandFactory, Parser};
use std::path::{Path, PathBuf};

use crate::error::BlockerError;
use crate::hosts::{EditOptions, HostsEditor, InsertOutcome, RemovalStrategy, RemoveOutcome};
use crate::sites::SiteList;

#[derive(Parser)]
#[command(name = "webblocker", version)]
#[command(about = "Block/unblock sites in a hosts file safely")]
#[command(group(ArgGroup::new("mode").args(["block", "unblock", "list"])))]
pub struct Cli {
    /// Add block section to hosts file
    #[arg(long)]
    pub block: bool,

    /// Remove block section from hosts file
    #[arg(long)]
    pub unblock: bool,

    /// List blocked entries
    #[arg(long)]
    pub list: bool,

    /// Path to hosts file to edit (default: the system hosts file)
    #[arg(long, value_name = "PATH")]
    pub hosts: Option<PathBuf>,

    /// Show changes without modifying files
    #[arg(long)]
    pub dry_run: bool,

    /// Do not create a backup file before modifying hosts
    #[arg(long)]
    pub no_backup: bool,

    /// Site list to use (default: sites.toml in the config dir)
    #[arg(long, value_name = "PATH")]
    pub sites: Option<PathBuf>,

    /// Write the default site list if none exists yet
    #[arg(long)]
    pub init_sites: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Block,
    Unblock,
    List,
}

impl Cli {
    /// Selected mode flag, if any.
    pub fn mode(&self) -> Option<Mode> {
        if self.block {
            Some(Mode::Block)
        } else if self.unblock {
            Some(Mode::Unblock)
        } else if self.list {
            Some(Mode::List)
        } else {
            None
        }
    }

    pub fn edit_options(&self) -> EditOptions {
        EditOptions {
            dry_run: self.dry_run,
            make_backup: !self.no_backup,
        }
    }
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose, cli.quiet)?;

    let sites_path = cli.sites.clone().unwrap_or_else(crate::config::sites_path);
    if cli.init_sites {
        cmd_init_sites(&sites_path)?;
        if cli.mode().is_none() {
            return Ok(());
        }
    }

    let hosts_path = cli
        .hosts
        .clone()
        .unwrap_or_else(crate::platform::default_hosts_path);
    if !hosts_path.exists() {
        return Err(BlockerError::HostsNotFound(hosts_path).into());
    }

    let Some(mode) = cli.mode() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let sites = SiteList::load(&sites_path)
        .with_context(|| format!("load site list {}", sites_path.display()))?;
    let editor = HostsEditor::new(hosts_path, sites);

    match mode {
        Mode::Block => cmd_block(&editor, cli.edit_options()),
        Mode::Unblock => cmd_unblock(&editor, cli.edit_options()),
        Mode::List => cmd_list(&editor),
    }
}

fn cmd_init_sites(path: &Path) -> Result<()> {
    if SiteList::default().create(path)? {
        println!("Wrote default site list: {}", path.display());
    } else {
        println!("Site list already exists: {}", path.display());
    }
    Ok(())
}

fn cmd_block(editor: &HostsEditor, opts: EditOptions) -> Result<()> {
    println!("Adding block section to {}", editor.path().display());
    match editor.insert_block(opts)? {
        InsertOutcome::AlreadyPresent => {
            println!("Block section already present; skipping add.");
        }
        InsertOutcome::Preview(lines) => {
            println!("DRY-RUN: Would create backup (if enabled) and append block section with the following lines:");
            for line in lines {
                println!("{line}");
            }
        }
        InsertOutcome::Inserted { entries, backup } => {
            if let Some(bak) = backup {
                println!("Backup created: {}", bak.display());
            }
            println!("Block section added ({entries} entries).");
        }
    }
    Ok(())
}

fn cmd_unblock(editor: &HostsEditor, opts: EditOptions) -> Result<()> {
    println!("Removing block section from {}", editor.path().display());
    match editor.remove_block(opts)? {
        RemoveOutcome::NothingToRemove => {
            println!("No block section or matching host lines found; nothing to remove.");
        }
        RemoveOutcome::Preview { strategy, lines } => {
            match strategy {
                RemovalStrategy::Marked => println!("DRY-RUN: Would remove lines from markers:"),
                RemovalStrategy::Fallback => {
                    println!("DRY-RUN: Would remove lines matching blocked hostnames (fallback):")
                }
            }
            for line in lines {
                println!("{line}");
            }
        }
        RemoveOutcome::Removed { strategy, backup, .. } => {
            if let Some(bak) = backup {
                println!("Backup created: {}", bak.display());
            }
            match strategy {
                RemovalStrategy::Marked => println!("Marked block removed."),
                RemovalStrategy::Fallback => println!("Removed matching host lines (fallback)."),
            }
        }
    }
    Ok(())
}

fn cmd_list(editor: &HostsEditor) -> Result<()> {
    match editor.list_blocked()? {
        Some(block) => {
            println!("Currently blocked entries:");
            println!("{block}");
        }
        None => println!("No block section found in hosts file."),
    }
    Ok(())
}
