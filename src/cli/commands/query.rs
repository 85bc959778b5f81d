//! Single-query command implementations
//!
//! The list, region, min-production and sorted commands each load one
//! catalog, run one query over it and render the result.

use super::render::{heading, render_centers};
use super::shared::{CommandSummary, configure_colours, load_catalog, setup_logging, write_output};
use crate::Result;
use crate::app::models::Center;
use crate::app::services::catalog_service::CatalogService;
use crate::cli::args::{CommonArgs, ListArgs, MinProductionArgs, RegionArgs};
use crate::config::RenderFormat;
use std::time::Instant;
use tracing::{debug, info};

/// List every center in file order
pub fn run_list(args: ListArgs) -> Result<CommandSummary> {
    run_query(&args.common, "ALL CENTERS", CatalogService::list_all)
}

/// List centers ordered by name
pub fn run_sorted(args: ListArgs) -> Result<CommandSummary> {
    run_query(&args.common, "CENTERS SORTED BY NAME", CatalogService::sort_by_name)
}

/// Find centers located in a commune
pub fn run_region(args: RegionArgs) -> Result<CommandSummary> {
    let title = format!("CENTERS IN COMMUNE '{}'", args.region.trim());
    run_query(&args.common, &title, |service| {
        service.find_by_region(args.region.as_str())
    })
}

/// Find centers producing at least the threshold
pub fn run_min_production(args: MinProductionArgs) -> Result<CommandSummary> {
    let title = format!("PRODUCTION >= {}", args.threshold);
    run_query(&args.common, &title, |service| {
        service.filter_by_minimum_production(args.threshold)
    })
}

fn run_query<F>(args: &CommonArgs, title: &str, query: F) -> Result<CommandSummary>
where
    F: FnOnce(&CatalogService) -> Vec<Center>,
{
    let start_time = Instant::now();

    setup_logging(args)?;
    debug!("Query arguments: {:?}", args);
    args.validate()?;

    let config = args.to_config();
    configure_colours(&config);

    let (service, stats) = load_catalog(&config)?;
    let results = query(&service);
    info!("{}: {} of {} centers", title, results.len(), service.len());

    debug!("Rendering results as {}", config.render_format);
    let rendered = render_centers(&results, config.render_format)?;
    let output = match config.render_format {
        RenderFormat::Human => format!("{}{}", heading(title), rendered),
        RenderFormat::Json | RenderFormat::Csv => rendered,
    };
    write_output(&config, &output)?;

    Ok(CommandSummary::from_load(
        &stats,
        results.len(),
        start_time.elapsed(),
    ))
}
