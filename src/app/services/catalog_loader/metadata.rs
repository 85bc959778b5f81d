//! Catalog loading statistics
//!
//! This module defines the counters collected while a source is folded into
//! centers.

use super::SourceKind;
use super::parser::LineShape;
use crate::Error;
use std::time::Duration;

/// Statistics about a single load pass
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Kind of source that was read
    pub source_kind: Option<SourceKind>,

    /// Physical lines read, header and blank lines included
    pub lines_read: usize,

    /// Whether a header line was discarded
    pub header_skipped: bool,

    /// Blank or whitespace-only lines skipped
    pub blank_lines: usize,

    /// Centers built from basic lines
    pub basic_centers: usize,

    /// Centers built from full lines
    pub full_centers: usize,

    /// Lines rejected for a wrong column count
    pub column_count_rejections: usize,

    /// Lines rejected for an unparsable production or price
    pub number_format_rejections: usize,

    /// Lines rejected by record validation
    pub validation_rejections: usize,

    /// Whether the source could not be opened or was only partially read
    pub source_failed: bool,

    /// Time taken to load the source
    pub load_duration: Duration,

    /// Rendered diagnostics for every rejected line or source failure
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            source_kind: None,
            lines_read: 0,
            header_skipped: false,
            blank_lines: 0,
            basic_centers: 0,
            full_centers: 0,
            column_count_rejections: 0,
            number_format_rejections: 0,
            validation_rejections: 0,
            source_failed: false,
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Record a successfully parsed line
    pub(crate) fn record_parsed(&mut self, shape: LineShape) {
        match shape {
            LineShape::Basic => self.basic_centers += 1,
            LineShape::Full => self.full_centers += 1,
        }
    }

    /// Record a rejected line, classified by its error
    pub(crate) fn record_rejection(&mut self, error: &Error, message: String) {
        match error {
            Error::ColumnCount { .. } => self.column_count_rejections += 1,
            Error::NumberFormat { .. } => self.number_format_rejections += 1,
            _ => self.validation_rejections += 1,
        }
        self.errors.push(message);
    }

    /// Total centers loaded
    pub fn centers_loaded(&self) -> usize {
        self.basic_centers + self.full_centers
    }

    /// Total data lines rejected
    pub fn lines_rejected(&self) -> usize {
        self.column_count_rejections + self.number_format_rejections + self.validation_rejections
    }

    /// Data lines considered, excluding header and blank lines
    pub fn data_lines(&self) -> usize {
        self.centers_loaded() + self.lines_rejected()
    }

    /// Calculate the rejection rate as a percentage of data lines
    pub fn rejection_rate(&self) -> f64 {
        let data_lines = self.data_lines();
        if data_lines == 0 {
            0.0
        } else {
            (self.lines_rejected() as f64 / data_lines as f64) * 100.0
        }
    }

    /// Check if any line or the source itself failed
    pub fn has_errors(&self) -> bool {
        self.source_failed || !self.errors.is_empty()
    }

    /// Get a summary string of the load pass
    pub fn summary(&self) -> String {
        let kind = self.source_kind.map_or("unknown", SourceKind::label);
        format!(
            "Read {} {} lines, loaded {} centers ({} basic, {} full), rejected {} ({:.1}%) in {:.3}s",
            self.lines_read,
            kind,
            self.centers_loaded(),
            self.basic_centers,
            self.full_centers,
            self.lines_rejected(),
            self.rejection_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
