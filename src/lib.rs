//! Aquaculture Catalog Library
//!
//! A Rust library for loading catalogs of aquaculture production centers from
//! semicolon-delimited text files and querying them in memory.
//!
//! This library provides tools for:
//! - Validated record types for centers, products, addresses and routes
//! - A resilient line-oriented loader that detects basic (6 column) and full
//!   (12 column) records and reports malformed lines without aborting
//! - A read-only query service with region search, production threshold
//!   filtering and case-insensitive name ordering
//! - Tabular, JSON and CSV rendering for the command line

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_loader;
        pub mod catalog_service;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Address, Center, Product, Route};
pub use app::services::catalog_loader::{CatalogLoader, SourceKind};
pub use app::services::catalog_service::CatalogService;
pub use config::CatalogConfig;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog loading, validation and reporting
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source identifier handed to the loader was empty or blank
    #[error("Invalid source: {message}")]
    InvalidSource { message: String },

    /// Source file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// A record failed field validation
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// A numeric column could not be parsed
    #[error("Number format error in field '{field}': '{value}' ({reason})")]
    NumberFormat {
        field: String,
        value: String,
        reason: String,
    },

    /// A data line had neither the basic nor the full column count
    #[error("Line has {found} columns, only {basic} or {full} are accepted")]
    ColumnCount {
        found: usize,
        basic: usize,
        full: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// CSV writing error
    #[error("CSV writing error: {message}")]
    CsvWriting {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid source error
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a number format error for a named column
    pub fn number_format(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::NumberFormat {
            field: field.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a column count error
    pub fn column_count(found: usize, basic: usize, full: usize) -> Self {
        Self::ColumnCount { found, basic, full }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a CSV writing error
    pub fn csv_writing(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            message: "CSV writing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
