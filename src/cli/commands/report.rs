//! Report command implementation
//!
//! Runs every catalog query in sequence over one file: the full listing, a
//! commune search, a production filter, the name ordering and finally the
//! composition table of each center.

use super::render::{heading, render_composition_table, render_summary_table};
use super::shared::{CommandSummary, configure_colours, load_catalog, setup_logging, write_output};
use crate::app::models::Center;
use crate::app::services::catalog_service::CatalogService;
use crate::cli::args::ReportArgs;
use crate::config::{CatalogConfig, RenderFormat};
use crate::{Error, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Results of every report query, serialized for JSON output
#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub source: String,
    pub region_query: String,
    pub minimum_production: i32,
    pub all_centers: Vec<Center>,
    pub by_region: Vec<Center>,
    pub by_minimum_production: Vec<Center>,
    pub sorted_by_name: Vec<Center>,
    pub lines_rejected: usize,
}

impl CatalogReport {
    /// Run the report queries against a loaded catalog
    pub fn build(config: &CatalogConfig, service: &CatalogService, lines_rejected: usize) -> Self {
        Self {
            source: config.source_path.display().to_string(),
            region_query: config.region_query.clone(),
            minimum_production: config.minimum_production,
            all_centers: service.list_all(),
            by_region: service.find_by_region(config.region_query.as_str()),
            by_minimum_production: service.filter_by_minimum_production(config.minimum_production),
            sorted_by_name: service.sort_by_name(),
            lines_rejected,
        }
    }

    /// Render the report as headed tables
    pub fn to_human(&self) -> String {
        let mut output = heading("ALL CENTERS");
        output.push_str(&render_summary_table(&self.all_centers));

        output.push_str(&heading(&format!(
            "SEARCH: centers in commune '{}'",
            self.region_query
        )));
        output.push_str(&render_summary_table(&self.by_region));

        output.push_str(&heading(&format!(
            "FILTER: production >= {}",
            self.minimum_production
        )));
        output.push_str(&render_summary_table(&self.by_minimum_production));

        output.push_str(&heading("CENTERS SORTED BY NAME"));
        output.push_str(&render_summary_table(&self.sorted_by_name));

        output.push_str(&heading("COMPOSITION: CENTER + PRODUCT + ADDRESS + ROUTE"));
        output.push_str(&render_composition_table(&self.all_centers));

        output
    }

    /// Render the report as a pretty-printed JSON object
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("Failed to serialize catalog report", e))?;
        json.push('\n');
        Ok(json)
    }
}

/// Report command runner
///
/// An empty load is not an error. Human output gets a notice instead of the
/// tables; JSON output is a report whose result lists are all empty.
pub fn run_report(args: ReportArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting catalog report");
    debug!("Report arguments: {:?}", args);
    args.validate()?;

    let config = args.to_config();
    configure_colours(&config);

    let (service, stats) = load_catalog(&config)?;

    if service.is_empty() && config.render_format != RenderFormat::Json {
        warn!("Report skipped, no centers loaded");
        write_output(
            &config,
            &format!(
                "No centers were loaded. Check the catalog file: {}\n",
                config.source_path.display()
            ),
        )?;
        return Ok(CommandSummary::from_load(&stats, 0, start_time.elapsed()));
    }

    let report = CatalogReport::build(&config, &service, stats.lines_rejected());
    let output = match config.render_format {
        RenderFormat::Json => report.to_json()?,
        RenderFormat::Human | RenderFormat::Csv => report.to_human(),
    };
    write_output(&config, &output)?;

    info!(
        "Catalog report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(CommandSummary::from_load(
        &stats,
        report.all_centers.len(),
        start_time.elapsed(),
    ))
}
