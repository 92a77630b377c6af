//! Webblocker - block sites by redirecting them in the hosts file.

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod platform;
pub mod sites;
