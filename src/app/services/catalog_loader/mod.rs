//! Catalog loader for semicolon-delimited center files
//!
//! This module reads catalog files line by line, detects basic and full
//! records by column count and builds validated [`Center`] values. Malformed
//! lines are reported through a [`LoadReporter`] and skipped; a load only
//! fails when the caller passes a blank source identifier.
//!
//! [`Center`]: crate::app::models::Center

use crate::constants::HEADER_FILE_SUFFIX;
use std::fmt;
use std::path::Path;

pub mod loader;
pub mod metadata;
pub mod parser;
pub mod reporter;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;
pub use parser::{LineOutcome, LineShape};
pub use reporter::{CollectingReporter, LineIssue, LoadReporter, ReportedIssue, TracingReporter};

/// Kind of catalog source, decided by the source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `.csv` source; the first physical line is a header
    Csv,
    /// Any other source; every line is data
    Txt,
}

impl SourceKind {
    /// Detect the kind from a source path (`.csv`, case-insensitive)
    pub fn detect(source: &Path) -> Self {
        let name = source.to_string_lossy().to_lowercase();
        if name.ends_with(HEADER_FILE_SUFFIX) {
            Self::Csv
        } else {
            Self::Txt
        }
    }

    /// Whether the first physical line is a header to discard
    pub fn has_header(self) -> bool {
        matches!(self, Self::Csv)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Loader building centers from catalog files
///
/// Skipped lines and unreadable sources are handed to the reporter; the
/// default [`TracingReporter`] logs them as warnings.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader<R = TracingReporter> {
    reporter: R,
}

impl CatalogLoader {
    /// Create a loader that reports through `tracing`
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: LoadReporter> CatalogLoader<R> {
    /// Create a loader with a custom reporting sink
    pub fn with_reporter(reporter: R) -> Self {
        Self { reporter }
    }

    /// Reporting sink used by this loader
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the loader and return its reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
