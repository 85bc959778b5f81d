//! Application constants for the aquaculture catalog
//!
//! This module contains the input format constants, default query values
//! and table layout used throughout the catalog.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter for every supported input file
pub const FIELD_DELIMITER: char = ';';

/// Suffix (compared case-insensitively) marking a source whose first line is a header
pub const HEADER_FILE_SUFFIX: &str = ".csv";

/// Column count of a basic record (center + product)
pub const BASIC_COLUMN_COUNT: usize = 6;

/// Column count of a full record (center + product + address + route)
pub const FULL_COLUMN_COUNT: usize = 12;

/// Column positions within a data line
pub mod columns {
    pub const CENTER_NAME: usize = 0;
    pub const COMMUNE: usize = 1;
    pub const PRODUCTION: usize = 2;
    pub const PRODUCT_NAME: usize = 3;
    pub const PRODUCT_CATEGORY: usize = 4;
    pub const PRODUCT_PRICE: usize = 5;
    pub const STREET: usize = 6;
    pub const NUMBER: usize = 7;
    pub const REGION: usize = 8;
    pub const ROUTE_NAME: usize = 9;
    pub const ROUTE_RESPONSIBLE: usize = 10;
    pub const ROUTE_DATE: usize = 11;
}

/// Header written to CSV exports, in column order
pub const CSV_HEADER: [&str; FULL_COLUMN_COUNT] = [
    "nombreCentro",
    "comuna",
    "produccion",
    "nombreProducto",
    "tipoProducto",
    "precioProducto",
    "calle",
    "numero",
    "region",
    "nomRuta",
    "responsableRuta",
    "fechaRuta",
];

// =============================================================================
// Report Defaults
// =============================================================================

/// Commune searched by the report command when none is given
pub const DEFAULT_REGION_QUERY: &str = "Calbuco";

/// Production threshold used by the report command when none is given
pub const DEFAULT_MINIMUM_PRODUCTION: i32 = 1500;

/// Placeholder shown for fields a center does not carry
pub const MISSING_VALUE: &str = "-";

/// Width of the summary table separator
pub const SUMMARY_RULE_WIDTH: usize = 93;

/// Width of the composition table separator
pub const COMPOSITION_RULE_WIDTH: usize = 127;
