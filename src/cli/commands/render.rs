//! Rendering of query results
//!
//! Centers are rendered as fixed-width tables for people, as a JSON array
//! for scripts, or as semicolon-delimited rows the catalog loader reads back.

use crate::app::models::Center;
use crate::config::RenderFormat;
use crate::constants::{
    COMPOSITION_RULE_WIDTH, CSV_HEADER, FIELD_DELIMITER, MISSING_VALUE, SUMMARY_RULE_WIDTH,
};
use crate::{Error, Result};
use colored::*;

/// Message shown in place of an empty result table
pub const EMPTY_RESULT_MESSAGE: &str = "No results to display.";

/// Render centers in the requested format
pub fn render_centers(centers: &[Center], format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Human => Ok(render_summary_table(centers)),
        RenderFormat::Json => render_json(centers),
        RenderFormat::Csv => render_csv(centers),
    }
}

/// Format a section heading for human output
pub fn heading(title: &str) -> String {
    format!("\n{}\n\n", format!("=== {} ===", title).bold().cyan())
}

/// Render the summary table: one row per center with its product
pub fn render_summary_table(centers: &[Center]) -> String {
    if centers.is_empty() {
        return format!("{}\n\n", EMPTY_RESULT_MESSAGE);
    }

    let mut output = format!(
        "{:<20} | {:<15} | {:<11} | {:<27} | {:<12} | {:<10}\n",
        "CENTER", "COMMUNE", "PRODUCTION", "PRODUCT", "CATEGORY", "PRICE"
    );
    output.push_str(&"-".repeat(SUMMARY_RULE_WIDTH));
    output.push('\n');

    for center in centers {
        let product = center.product();
        output.push_str(&format!(
            "{:<20} | {:<15} | {:<11} | {:<27} | {:<12} | {:<10.1}\n",
            center.name(),
            center.commune().unwrap_or(MISSING_VALUE),
            center.production(),
            product.name(),
            product.category(),
            product.price()
        ));
    }

    output.push('\n');
    output
}

/// Render the composition table: center, product, address and route
pub fn render_composition_table(centers: &[Center]) -> String {
    let mut output = format!(
        "{:<20} | {:<25} | {:<40} | {:<25} | {:<25} | {:<15}\n",
        "CENTER", "PRODUCT", "ADDRESS", "ROUTE", "RESPONSIBLE", "DATE"
    );
    output.push_str(&"-".repeat(COMPOSITION_RULE_WIDTH));
    output.push('\n');

    for center in centers {
        let address = center
            .address()
            .map(|address| address.to_string())
            .unwrap_or_else(|| "No address".to_string());
        let route = center.route();

        output.push_str(&format!(
            "{:<20} | {:<25} | {:<40} | {:<25} | {:<25} | {:<15}\n",
            center.name(),
            center.product().name(),
            address,
            route.map_or("No route", |r| r.name()),
            route.map_or(MISSING_VALUE, |r| r.responsible()),
            route.map_or(MISSING_VALUE, |r| r.scheduled_date()),
        ));
    }

    output.push('\n');
    output
}

/// Render centers as a pretty-printed JSON array
pub fn render_json(centers: &[Center]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(centers)
        .map_err(|e| Error::serialization("Failed to serialize centers to JSON", e))?;
    json.push('\n');
    Ok(json)
}

/// Render centers as semicolon-delimited rows under the 12-column header
///
/// Centers with both an address and a route are written as full rows.
/// Any other center is written as a 6-field basic row, so the output can be
/// loaded back as a `.csv` catalog.
pub fn render_csv(centers: &[Center]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::csv_writing("Failed to write CSV header", e))?;

    for center in centers {
        writer
            .write_record(csv_row(center))
            .map_err(|e| {
                Error::csv_writing(format!("Failed to write CSV row for {}", center.name()), e)
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush CSV output", e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn csv_row(center: &Center) -> Vec<String> {
    let product = center.product();
    let mut row = Vec::with_capacity(CSV_HEADER.len());
    row.push(center.name().to_string());
    row.push(center.commune().unwrap_or_default().to_string());
    row.push(center.production().to_string());
    row.push(product.name().to_string());
    row.push(product.category().to_string());
    row.push(product.price().to_string());

    if let (Some(address), Some(route)) = (center.address(), center.route()) {
        row.push(address.street().to_string());
        row.push(address.number().to_string());
        row.push(address.region().to_string());
        row.push(route.name().to_string());
        row.push(route.responsible().to_string());
        row.push(route.scheduled_date().to_string());
    }

    row
}
