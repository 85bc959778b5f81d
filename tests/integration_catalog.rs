//! Integration tests for catalog loading, querying and command output
//!
//! These tests write small catalog files to temporary directories and drive
//! the public library API and the command runner end to end.

use aquaculture_catalog::app::services::catalog_loader::CollectingReporter;
use aquaculture_catalog::cli::args::{Args, Commands};
use aquaculture_catalog::cli::commands;
use aquaculture_catalog::{CatalogLoader, CatalogService, Center};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

const DATA_LINE: &str = "A;Calbuco;2000;Salmon;Premium;5.5";
const HEADER_LINE: &str =
    "nombreCentro;comuna;produccion;nombreProducto;tipoProducto;precioProducto";

/// Write a catalog file with the given lines into `dir`
fn write_catalog(dir: &Path, filename: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, lines.join("\n")).expect("Failed to write test catalog");
    path
}

fn mixed_catalog_lines() -> Vec<&'static str> {
    vec![
        HEADER_LINE,
        "Punta Chilen;Calbuco;1200;Chorito;Granel;1.5;Camino Costero;10;Los Lagos;Ruta Sur;Ana Perez;2024-05-01",
        "Isla Huar;Calbuco;2500;Salmon Atlantico;Premium;5.5",
        "Centro Roto;Calbuco;mucho;Salmon;Premium;5.5",
        "Bahia Abtao;CALBUCO;3000;Ostra;Premium;9.5;Av. Costanera;120;Los Lagos;Ruta Norte;Luis Soto;2024-06-15",
        "Cinco;Columnas;1;2;3",
        "Centro Quellon;Quellon;1500;Salmon Coho;Estandar;4.5;Ruta 5;3000;Los Lagos;Ruta Chiloe;Eva Diaz;2024-07-01",
    ]
}

fn run_command(argv: &[&str]) -> commands::CommandSummary {
    let args = Args::try_parse_from(argv).expect("Failed to parse arguments");
    let command = args.command.expect("Command should be present");
    commands::run(command).expect("Command should succeed")
}

/// A headerless .txt file with one basic line yields exactly that center
#[test]
fn test_txt_scenario_loads_single_basic_center() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "datosCentros.txt", &[DATA_LINE]);

    let centers = CatalogLoader::new().load(&path).unwrap();

    assert_eq!(centers.len(), 1);
    let center = &centers[0];
    assert_eq!(center.name(), "A");
    assert_eq!(center.production(), 2000);
    assert_eq!(center.product().name(), "Salmon");
    assert_eq!(center.product().category(), "Premium");
    assert_eq!(center.product().price(), 5.5);
    assert!(center.address().is_none());
    assert!(center.route().is_none());
}

/// A .csv file with a header line yields the same center as the .txt file
#[test]
fn test_csv_scenario_discards_header() {
    let temp_dir = TempDir::new().unwrap();
    let txt = write_catalog(temp_dir.path(), "datosCentros.txt", &[DATA_LINE]);
    let csv = write_catalog(temp_dir.path(), "datosCentros.CSV", &[HEADER_LINE, DATA_LINE]);

    let loader = CatalogLoader::new();
    let from_txt = loader.load(&txt).unwrap();
    let from_csv = loader.load(&csv).unwrap();

    assert_eq!(from_csv.len(), 1);
    assert_eq!(from_txt, from_csv);
}

#[test]
fn test_mixed_catalog_through_service() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "centros.csv", &mixed_catalog_lines());

    let loader = CatalogLoader::with_reporter(CollectingReporter::new());
    let centers = loader.load(&path).unwrap();
    let reporter = loader.into_reporter();

    assert_eq!(centers.len(), 4);
    assert_eq!(reporter.skipped_lines(), vec![4, 6]);

    let service = CatalogService::new(&centers);
    let names = |centers: &[Center]| -> Vec<String> {
        centers.iter().map(|c| c.name().to_string()).collect()
    };

    assert_eq!(
        names(&service.find_by_region("calbuco")),
        vec!["Punta Chilen", "Bahia Abtao"]
    );
    assert_eq!(
        names(&service.filter_by_minimum_production(1500)),
        vec!["Isla Huar", "Bahia Abtao", "Centro Quellon"]
    );
    assert_eq!(
        names(&service.sort_by_name()),
        vec!["Bahia Abtao", "Centro Quellon", "Isla Huar", "Punta Chilen"]
    );

    let full = &centers[0];
    let address = full.address().unwrap();
    let branch = full.route().unwrap().branch().unwrap();
    assert!(Arc::ptr_eq(address, branch));
    assert_eq!(address.commune(), "Calbuco");
    assert_eq!(address.region(), "Los Lagos");
}

#[test]
fn test_missing_catalog_loads_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("noExiste.txt");

    let (centers, stats) = CatalogLoader::new().load_with_stats(&missing).unwrap();
    assert!(centers.is_empty());
    assert!(stats.source_failed);
}

#[test]
fn test_region_command_writes_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "centros.csv", &mixed_catalog_lines());
    let output = temp_dir.path().join("calbuco.json");

    let summary = run_command(&[
        "aquaculture-catalog",
        "region",
        path.to_str().unwrap(),
        "CALBUCO",
        "--format",
        "json",
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);

    assert_eq!(summary.centers_loaded, 4);
    assert_eq!(summary.centers_shown, 2);
    assert_eq!(summary.lines_rejected, 2);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let centers = json.as_array().unwrap();
    assert_eq!(centers.len(), 2);
    assert_eq!(centers[0]["name"], "Punta Chilen");
    assert_eq!(centers[1]["name"], "Bahia Abtao");
}

/// A sorted CSV export loads back into the same centers, in sorted order
#[test]
fn test_csv_export_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "centros.csv", &mixed_catalog_lines());
    let export = temp_dir.path().join("ordenados.csv");

    let summary = run_command(&[
        "aquaculture-catalog",
        "sorted",
        path.to_str().unwrap(),
        "--format",
        "csv",
        "-q",
        "-o",
        export.to_str().unwrap(),
    ]);
    assert_eq!(summary.centers_shown, 4);

    let source_service = CatalogService::new(&CatalogLoader::new().load(&path).unwrap());
    let reloaded = CatalogLoader::new().load(&export).unwrap();

    assert_eq!(reloaded, source_service.sort_by_name());
}

#[test]
fn test_min_production_command_renders_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "centros.csv", &mixed_catalog_lines());
    let output = temp_dir.path().join("filtro.txt");

    let summary = run_command(&[
        "aquaculture-catalog",
        "min-production",
        path.to_str().unwrap(),
        "2600",
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(summary.centers_shown, 1);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("PRODUCTION >= 2600"));
    assert!(text.contains("Bahia Abtao"));
    assert!(!text.contains("Isla Huar"));
}

#[test]
fn test_report_command_on_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "vacio.txt", &[]);
    let output = temp_dir.path().join("reporte.txt");

    let summary = run_command(&[
        "aquaculture-catalog",
        "report",
        path.to_str().unwrap(),
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(summary.centers_loaded, 0);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("No centers were loaded"));
}

#[test]
fn test_json_report_on_empty_catalog_is_valid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "vacio.txt", &[]);
    let output = temp_dir.path().join("reporte.json");

    let summary = run_command(&[
        "aquaculture-catalog",
        "report",
        path.to_str().unwrap(),
        "--format",
        "json",
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(summary.centers_loaded, 0);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["all_centers"].as_array().unwrap().len(), 0);
    assert_eq!(json["by_region"].as_array().unwrap().len(), 0);
    assert_eq!(json["region_query"], "Calbuco");
}

#[test]
fn test_report_command_sections() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "centros.csv", &mixed_catalog_lines());
    let output = temp_dir.path().join("reporte.txt");

    let summary = run_command(&[
        "aquaculture-catalog",
        "report",
        path.to_str().unwrap(),
        "--region",
        "Quellon",
        "--min-production",
        "3000",
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(summary.centers_shown, 4);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("SEARCH: centers in commune 'Quellon'"));
    assert!(text.contains("FILTER: production >= 3000"));
    assert!(text.contains("COMPOSITION: CENTER + PRODUCT + ADDRESS + ROUTE"));
    assert!(!text.contains('\u{1b}'), "file output must not carry colour codes");
}

#[test]
fn test_command_rejects_output_over_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path(), "centros.csv", &[HEADER_LINE, DATA_LINE]);
    let argv = [
        "aquaculture-catalog",
        "list",
        path.to_str().unwrap(),
        "-q",
        "-o",
        path.to_str().unwrap(),
    ];

    let args = Args::try_parse_from(argv).unwrap();
    let Some(command @ Commands::List(_)) = args.command else {
        panic!("expected list command");
    };
    assert!(commands::run(command).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{HEADER_LINE}\n{DATA_LINE}"));
}
