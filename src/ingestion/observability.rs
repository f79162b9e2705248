//! Parse outcome reporting.
//!
//! Every call through [`super::parse_from_path`] or [`super::parse_from_store`] produces exactly
//! one [`ParseReport`], handed to the configured [`ParseObserver`]. A report renders itself as a
//! single log line, so sinks only decide where the line goes.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SchoolsError;

use super::detect::SheetFormat;

/// How bad a failed parse is. Compared against `ParseOptions::alert_at_or_above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParseSeverity {
    /// The workbook was there but could not be used.
    Error,
    /// No workbook to read, or the filesystem failed.
    Critical,
}

impl ParseSeverity {
    pub fn for_error(e: &SchoolsError) -> Self {
        match e {
            SchoolsError::SourceNotFound { .. } | SchoolsError::Io(_) => ParseSeverity::Critical,
            SchoolsError::SourceUnreadable { .. }
            | SchoolsError::Registry { .. }
            | SchoolsError::Json(_) => ParseSeverity::Error,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ParseSeverity::Error => "error",
            ParseSeverity::Critical => "critical",
        }
    }
}

/// What a successful parse saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Detected layout; `None` for a sheet with no rows.
    pub format: Option<SheetFormat>,
    /// Rows in the sheet, header included.
    pub rows: usize,
    pub schools: usize,
    pub districts: usize,
}

/// Result half of a [`ParseReport`].
#[derive(Debug, Clone, Copy)]
pub enum ParseOutcome<'a> {
    Parsed(ParseStats),
    Failed {
        severity: ParseSeverity,
        error: &'a SchoolsError,
        /// `severity` reached the alert threshold.
        alert: bool,
    },
}

/// One parse attempt: where the workbook came from and how it went.
#[derive(Debug, Clone, Copy)]
pub struct ParseReport<'a> {
    /// A path, or whatever the store describes itself as.
    pub source: &'a str,
    pub outcome: ParseOutcome<'a>,
}

impl<'a> ParseReport<'a> {
    pub fn parsed(source: &'a str, stats: ParseStats) -> Self {
        Self {
            source,
            outcome: ParseOutcome::Parsed(stats),
        }
    }

    pub fn failed(
        source: &'a str,
        error: &'a SchoolsError,
        alert_at_or_above: ParseSeverity,
    ) -> Self {
        let severity = ParseSeverity::for_error(error);
        Self {
            source,
            outcome: ParseOutcome::Failed {
                severity,
                error,
                alert: severity >= alert_at_or_above,
            },
        }
    }

    pub fn stats(&self) -> Option<ParseStats> {
        match self.outcome {
            ParseOutcome::Parsed(stats) => Some(stats),
            ParseOutcome::Failed { .. } => None,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self.outcome, ParseOutcome::Failed { alert: true, .. })
    }
}

impl fmt::Display for ParseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            ParseOutcome::Parsed(stats) => {
                let format = match stats.format {
                    Some(SheetFormat::Legacy) => "legacy",
                    Some(SheetFormat::Flat) => "flat",
                    None => "none",
                };
                write!(
                    f,
                    "ok source={} format={format} rows={} schools={} districts={}",
                    self.source, stats.rows, stats.schools, stats.districts
                )
            }
            ParseOutcome::Failed { severity, error, alert } => {
                if alert {
                    f.write_str("ALERT ")?;
                }
                write!(f, "{} source={} err={error}", severity.label(), self.source)
            }
        }
    }
}

/// Receives one report per parse attempt.
pub trait ParseObserver: Send + Sync {
    fn record(&self, report: &ParseReport<'_>);
}

/// Fan-out: every observer in the list sees every report, in order.
impl ParseObserver for Vec<Arc<dyn ParseObserver>> {
    fn record(&self, report: &ParseReport<'_>) {
        for observer in self {
            observer.record(report);
        }
    }
}

/// Writes report lines to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ParseObserver for StdErrObserver {
    fn record(&self, report: &ParseReport<'_>) {
        eprintln!("[parse] {report}");
    }
}

/// Appends timestamped report lines to a file. Write failures are ignored.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl ParseObserver for FileObserver {
    fn record(&self, report: &ParseReport<'_>) {
        let _guard = self.lock.lock().ok();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} {report}");
        }
    }
}
