//! Shared components for CLI commands
//!
//! This module contains the logging setup, catalog loading and output
//! writing used by every command.

use crate::app::services::catalog_loader::{CatalogLoader, LoadStats};
use crate::app::services::catalog_service::CatalogService;
use crate::cli::args::CommonArgs;
use crate::config::CatalogConfig;
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Command statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Number of centers loaded from the catalog
    pub centers_loaded: usize,
    /// Number of centers in the rendered results
    pub centers_shown: usize,
    /// Number of lines skipped while loading
    pub lines_rejected: usize,
    /// Whether the catalog file could not be read at all
    pub source_failed: bool,
    /// Total command time
    pub elapsed: Duration,
}

impl CommandSummary {
    /// Summarize a finished command from its load statistics
    pub fn from_load(stats: &LoadStats, centers_shown: usize, elapsed: Duration) -> Self {
        Self {
            centers_loaded: stats.centers_loaded(),
            centers_shown,
            lines_rejected: stats.lines_rejected(),
            source_failed: stats.source_failed,
            elapsed,
        }
    }
}

/// Set up structured logging for a catalog command
///
/// `RUST_LOG` takes precedence over the verbosity flags. Initialising twice
/// in one process keeps the first subscriber.
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aquaculture_catalog={}", log_level)));

    let initialised = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialised.is_err() {
        debug!("Logging already initialized, keeping existing subscriber");
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configured catalog into a query service
///
/// Skipped lines are reported through the loader's tracing reporter. A file
/// that cannot be read yields an empty service, not an error.
pub fn load_catalog(config: &CatalogConfig) -> Result<(CatalogService, LoadStats)> {
    let loader = CatalogLoader::new();
    let (centers, stats) = loader.load_with_stats(&config.source_path)?;

    if stats.source_failed {
        warn!(
            "Catalog could not be read, continuing with no centers: {}",
            config.source_path.display()
        );
    }

    debug!("{}", stats.summary());
    Ok((CatalogService::from(centers), stats))
}

/// Write rendered output to the configured file, or stdout when none is set
pub fn write_output(config: &CatalogConfig, output: &str) -> Result<()> {
    match &config.output_file {
        Some(path) => {
            std::fs::write(path, output).map_err(|e| {
                Error::io(format!("Failed to write results to {}", path.display()), e)
            })?;
            info!("Results written to: {}", path.display());
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

/// Disable terminal colours when results go to a file
pub fn configure_colours(config: &CatalogConfig) {
    if config.output_file.is_some() {
        colored::control::set_override(false);
    }
}
