//! Logging initialization

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` overrides the level picked from flags.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3),
        )
        .try_init()?;
    Ok(())
}
