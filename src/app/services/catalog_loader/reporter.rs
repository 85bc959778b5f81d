//! Reporting sinks for skipped lines and unreadable sources
//!
//! The loader never prints directly. Every rejected line and every
//! file-level failure is handed to a [`LoadReporter`], which decides where the
//! diagnostic goes.

use super::SourceKind;
use super::parser::LineShape;
use crate::Error;
use std::cell::RefCell;
use std::fmt;
use tracing::warn;

/// A data line that was rejected during loading
#[derive(Debug)]
pub struct LineIssue {
    /// Kind of the source the line came from
    pub source_kind: SourceKind,

    /// Physical 1-based line number, header and blank lines included
    pub line_number: usize,

    /// Detected shape, `None` when the column count matched neither shape
    pub shape: Option<LineShape>,

    /// Why the line was rejected
    pub error: Error,
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] line {}", self.source_kind, self.line_number)?;
        if let Some(shape) = self.shape {
            write!(f, " ({})", shape)?;
        }
        write!(f, ": {}. Line skipped.", self.error)
    }
}

/// Sink for loader diagnostics
pub trait LoadReporter {
    /// Called once for every rejected data line
    fn line_skipped(&self, issue: &LineIssue);

    /// Called when a source cannot be opened or read
    fn source_failed(&self, kind: SourceKind, source: &str, error: &Error);
}

impl<R: LoadReporter + ?Sized> LoadReporter for &R {
    fn line_skipped(&self, issue: &LineIssue) {
        (**self).line_skipped(issue)
    }

    fn source_failed(&self, kind: SourceKind, source: &str, error: &Error) {
        (**self).source_failed(kind, source, error)
    }
}

/// Reporter emitting structured `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl LoadReporter for TracingReporter {
    fn line_skipped(&self, issue: &LineIssue) {
        warn!(
            kind = %issue.source_kind,
            line = issue.line_number,
            "{}",
            issue
        );
    }

    fn source_failed(&self, kind: SourceKind, source: &str, error: &Error) {
        warn!(kind = %kind, "Failed to load {} source '{}': {}", kind, source, error);
    }
}

/// A diagnostic captured by [`CollectingReporter`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedIssue {
    pub source_kind: SourceKind,

    /// `None` for source-level failures
    pub line_number: Option<usize>,

    pub shape: Option<LineShape>,

    /// Rendered message
    pub message: String,
}

/// Reporter keeping every diagnostic in memory
#[derive(Debug, Default)]
pub struct CollectingReporter {
    issues: RefCell<Vec<ReportedIssue>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics collected so far
    pub fn issues(&self) -> Vec<ReportedIssue> {
        self.issues.borrow().clone()
    }

    /// Rendered messages in the order they were reported
    pub fn messages(&self) -> Vec<String> {
        self.issues
            .borrow()
            .iter()
            .map(|issue| issue.message.clone())
            .collect()
    }

    /// Line numbers of the skipped lines
    pub fn skipped_lines(&self) -> Vec<usize> {
        self.issues
            .borrow()
            .iter()
            .filter_map(|issue| issue.line_number)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.issues.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.borrow().is_empty()
    }
}

impl LoadReporter for CollectingReporter {
    fn line_skipped(&self, issue: &LineIssue) {
        self.issues.borrow_mut().push(ReportedIssue {
            source_kind: issue.source_kind,
            line_number: Some(issue.line_number),
            shape: issue.shape,
            message: issue.to_string(),
        });
    }

    fn source_failed(&self, kind: SourceKind, source: &str, error: &Error) {
        self.issues.borrow_mut().push(ReportedIssue {
            source_kind: kind,
            line_number: None,
            shape: None,
            message: format!("[{}] {}: {}", kind, source, error),
        });
    }
}
