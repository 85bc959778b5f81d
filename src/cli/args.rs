//! Command-line argument definitions for the aquaculture catalog
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand loads one catalog file and shares the output and logging flags
//! in [`CommonArgs`].

use crate::config::{CatalogConfig, RenderFormat};
use crate::constants::{DEFAULT_MINIMUM_PRODUCTION, DEFAULT_REGION_QUERY};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the aquaculture center catalog
///
/// Loads centers from semicolon-delimited catalog files and answers
/// listing, commune, production and ordering queries over them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aquaculture-catalog",
    version,
    about = "Load and query catalogs of aquaculture production centers",
    long_about = "Loads aquaculture centers from semicolon-delimited .txt or .csv catalog files \
                  (6 or 12 columns per line) and lists, searches, filters and sorts them. \
                  Malformed lines are reported and skipped without stopping the load."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the catalog
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List every loaded center in file order
    List(ListArgs),
    /// Find centers located in a commune (case-insensitive)
    Region(RegionArgs),
    /// Find centers producing at least a threshold
    MinProduction(MinProductionArgs),
    /// List centers ordered by name, ignoring case
    Sorted(ListArgs),
    /// Run the full catalog report: listing, commune search, threshold filter and ordering
    Report(ReportArgs),
}

/// Input, output and logging flags shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct CommonArgs {
    /// Catalog file to load
    ///
    /// Files ending in .csv (any case) carry a header line that is skipped.
    /// Any other file is read from its first line.
    #[arg(value_name = "FILE", help = "Catalog file to load (.txt or .csv)")]
    pub input: PathBuf,

    /// Output format for query results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Output file for query results
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for results"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Skipped-line warnings are hidden. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the list and sorted commands
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the region command
#[derive(Debug, Clone, Parser)]
pub struct RegionArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Commune to search for
    #[arg(value_name = "REGION", help = "Commune to search for")]
    pub region: String,
}

/// Arguments for the min-production command
#[derive(Debug, Clone, Parser)]
pub struct MinProductionArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Inclusive production threshold; negative values match every center
    #[arg(
        value_name = "THRESHOLD",
        allow_negative_numbers = true,
        help = "Minimum production (inclusive)"
    )]
    pub threshold: i32,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Commune searched by the report
    #[arg(
        long = "region",
        value_name = "REGION",
        default_value = DEFAULT_REGION_QUERY,
        help = "Commune searched by the report"
    )]
    pub region: String,

    /// Production threshold applied by the report
    #[arg(
        long = "min-production",
        value_name = "N",
        default_value_t = DEFAULT_MINIMUM_PRODUCTION,
        allow_negative_numbers = true,
        help = "Minimum production applied by the report"
    )]
    pub min_production: i32,
}

/// Output format options for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON format for scripting
    Json,
    /// Semicolon-delimited rows that load back into the catalog
    Csv,
}

impl From<OutputFormat> for RenderFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => RenderFormat::Human,
            OutputFormat::Json => RenderFormat::Json,
            OutputFormat::Csv => RenderFormat::Csv,
        }
    }
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the run configuration for these flags
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig::new(&self.input)
            .with_render_format(self.output_format.into())
            .with_output_file(self.output_file.clone())
    }

    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        self.to_config().validate()
    }
}

impl ReportArgs {
    /// Validate the report arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.common.output_format == OutputFormat::Csv {
            return Err(Error::configuration(
                "The report combines several queries and cannot be written as CSV; \
                 use --format human or --format json"
                    .to_string(),
            ));
        }

        self.common.validate()
    }

    /// Build the run configuration, including the report queries
    pub fn to_config(&self) -> CatalogConfig {
        self.common
            .to_config()
            .with_region_query(self.region.clone())
            .with_minimum_production(self.min_production)
    }
}
