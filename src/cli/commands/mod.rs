//! Command implementations for the aquaculture catalog CLI
//!
//! Each command loads one catalog file, queries it and renders the result.
//! Single queries live in `query`, the combined report in `report`.

pub mod query;
pub mod render;
pub mod report;
pub mod shared;

pub use shared::CommandSummary;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner for the catalog
///
/// Dispatches to the handler for the given subcommand:
/// - `list`, `region`, `min-production`, `sorted`: one query, one result table
/// - `report`: every query followed by the composition table
pub fn run(command: Commands) -> Result<CommandSummary> {
    match command {
        Commands::List(args) => query::run_list(args),
        Commands::Region(args) => query::run_region(args),
        Commands::MinProduction(args) => query::run_min_production(args),
        Commands::Sorted(args) => query::run_sorted(args),
        Commands::Report(args) => report::run_report(args),
    }
}
