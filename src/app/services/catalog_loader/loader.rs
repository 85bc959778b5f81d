//! Catalog source loading
//!
//! This module opens catalog sources and folds their lines into centers.
//! Each physical line becomes a [`LineOutcome`]; parsed centers are kept and
//! skipped lines are reported, so a single bad line never aborts a load.

use super::metadata::LoadStats;
use super::parser::{LineOutcome, parse_line};
use super::reporter::{LineIssue, LoadReporter};
use super::{CatalogLoader, SourceKind};
use crate::app::models::Center;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl<R: LoadReporter> CatalogLoader<R> {
    /// Load all valid centers from a catalog file
    ///
    /// Sources ending in `.csv` (any case) have their first line discarded as
    /// a header; every other source is read as data only.
    ///
    /// # Returns
    /// The centers built from valid lines, in file order. A missing,
    /// unreadable or empty file yields an empty vector.
    ///
    /// # Errors
    /// * Returns `Error::InvalidSource` if the source identifier is empty or blank
    pub fn load(&self, source: impl AsRef<Path>) -> Result<Vec<Center>> {
        self.load_with_stats(source).map(|(centers, _)| centers)
    }

    /// Load centers from a catalog file together with load statistics
    ///
    /// # Errors
    /// * Returns `Error::InvalidSource` if the source identifier is empty or blank
    pub fn load_with_stats(&self, source: impl AsRef<Path>) -> Result<(Vec<Center>, LoadStats)> {
        let source = source.as_ref();
        let label = source.to_string_lossy();
        if label.trim().is_empty() {
            return Err(Error::invalid_source("Source path cannot be empty"));
        }

        let kind = SourceKind::detect(source);
        info!("Loading {} catalog from {}", kind, source.display());

        let start_time = Instant::now();
        let file = match File::open(source) {
            Ok(file) => file,
            Err(e) => {
                let error = if e.kind() == ErrorKind::NotFound {
                    Error::file_not_found(label.to_string())
                } else {
                    Error::io(format!("Failed to open {}", source.display()), e)
                };
                self.reporter.source_failed(kind, &label, &error);

                let mut stats = LoadStats::new();
                stats.source_kind = Some(kind);
                stats.source_failed = true;
                stats.errors.push(error.to_string());
                stats.load_duration = start_time.elapsed();
                return Ok((Vec::new(), stats));
            }
        };

        let (centers, stats) = self.load_from_reader(BufReader::new(file), kind, &label);

        if centers.is_empty() && !stats.source_failed {
            info!("No valid centers found in {}", source.display());
        }
        info!("{}", stats.summary());

        Ok((centers, stats))
    }

    /// Fold the lines of any buffered reader into centers
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// line. A read error stops the fold; the centers accumulated up to that
    /// point are returned and the failure is reported once.
    ///
    /// # Arguments
    /// * `reader` - Source of catalog lines
    /// * `kind` - Source kind, deciding whether the first line is a header
    /// * `label` - Source name used in diagnostics
    pub fn load_from_reader<B: BufRead>(
        &self,
        reader: B,
        kind: SourceKind,
        label: &str,
    ) -> (Vec<Center>, LoadStats) {
        let start_time = Instant::now();
        let mut stats = LoadStats::new();
        stats.source_kind = Some(kind);
        let mut centers = Vec::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line_number = index + 1;

            let bytes = match line {
                Ok(bytes) => bytes,
                Err(e) => {
                    let error = Error::io(format!("Failed to read line {}", line_number), e);
                    self.reporter.source_failed(kind, label, &error);
                    stats.source_failed = true;
                    stats.errors.push(error.to_string());
                    break;
                }
            };
            stats.lines_read += 1;

            let decoded = String::from_utf8_lossy(&bytes);
            let text: &str = decoded.strip_suffix('\r').unwrap_or(&decoded);

            let outcome = if line_number == 1 && kind.has_header() {
                LineOutcome::Header
            } else {
                parse_line(text)
            };

            match outcome {
                LineOutcome::Header => {
                    debug!("Skipping {} header: {}", kind, text);
                    stats.header_skipped = true;
                }
                LineOutcome::Blank => stats.blank_lines += 1,
                LineOutcome::Parsed { shape, center } => {
                    stats.record_parsed(shape);
                    centers.push(center);
                }
                LineOutcome::Skipped { shape, error } => {
                    let issue = LineIssue {
                        source_kind: kind,
                        line_number,
                        shape,
                        error,
                    };
                    self.reporter.line_skipped(&issue);
                    stats.record_rejection(&issue.error, issue.to_string());
                }
            }
        }

        stats.load_duration = start_time.elapsed();
        debug!(
            "Folded {} lines from {} into {} centers",
            stats.lines_read,
            label,
            centers.len()
        );

        (centers, stats)
    }
}
