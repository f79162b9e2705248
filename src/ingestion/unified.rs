//! Parse entry points.
//!
//! Every call re-reads and re-parses its source; nothing is cached between calls, so calls
//! may run concurrently without coordination.
//!
//! - [`parse_sheet`]: pure pipeline over an already decoded [`Sheet`]
//! - [`parse_workbook_bytes`]: decode the first worksheet, then [`parse_sheet`]
//! - [`parse_from_path`] / [`parse_from_store`]: read the source, parse, and report the outcome to
//!   the configured [`ParseObserver`]

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::coerce::AffirmativeWords;
use crate::error::SchoolsResult;
use crate::processing::{assemble, reconcile};
use crate::registry::DistrictRegistry;
use crate::source::{SourceStore, read_source};
use crate::types::Payload;

use super::detect::detect_format;
use super::extract::{ExtractContext, Extraction};
use super::observability::{ParseObserver, ParseReport, ParseSeverity, ParseStats};
use super::workbook::{Sheet, read_first_sheet};

/// Options controlling parsing.
///
/// Use [`Default`] for the built-in registry and the standard affirmative words.
#[derive(Clone)]
pub struct ParseOptions {
    /// Known districts (`name -> id`).
    pub registry: Arc<DistrictRegistry>,
    /// Words that make a state-flag cell `true`.
    pub affirmative: AffirmativeWords,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ParseObserver>>,
    /// Failures at or above this severity are reported as alerts.
    pub alert_at_or_above: ParseSeverity,
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("registry_len", &self.registry.len())
            .field("affirmative", &self.affirmative)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            registry: Arc::new(DistrictRegistry::builtin()),
            affirmative: AffirmativeWords::default(),
            observer: None,
            alert_at_or_above: ParseSeverity::Critical,
        }
    }
}

impl ParseOptions {
    /// Options using `registry` and defaults for everything else.
    pub fn with_registry(registry: DistrictRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            ..Default::default()
        }
    }
}

/// Run detection, extraction, reconciliation, and assembly over a decoded sheet.
///
/// A sheet with no rows yields a payload holding only the registry districts.
pub fn parse_sheet(sheet: &Sheet, options: &ParseOptions) -> Payload {
    let ctx = ExtractContext {
        registry: &options.registry,
        affirmative: &options.affirmative,
    };
    let extraction = match detect_format(sheet) {
        Some(format) => format.extract(sheet, ctx),
        None => Extraction::default(),
    };
    let districts = reconcile(extraction.districts, &options.registry);
    assemble(sheet.header(), districts, extraction.schools)
}

/// Decode workbook bytes and parse the first worksheet.
///
/// # Examples
///
/// ```no_run
/// use schools_map_ingest::ingestion::{parse_workbook_bytes, ParseOptions};
///
/// # fn main() -> Result<(), schools_map_ingest::SchoolsError> {
/// let bytes = std::fs::read("database/data.xlsx")?;
/// let payload = parse_workbook_bytes(&bytes, &ParseOptions::default())?;
/// println!("schools={}", payload.meta.schools_count);
/// # Ok(())
/// # }
/// ```
pub fn parse_workbook_bytes(bytes: &[u8], options: &ParseOptions) -> SchoolsResult<Payload> {
    let sheet = read_first_sheet(bytes)?;
    Ok(parse_sheet(&sheet, options))
}

/// Read and parse a workbook file. A missing file is [`crate::SchoolsError::SourceNotFound`].
pub fn parse_from_path(path: impl AsRef<Path>, options: &ParseOptions) -> SchoolsResult<Payload> {
    let path = path.as_ref();
    observed(&path.display().to_string(), options, || read_source(path))
}

/// Read the current workbook from `store` and parse it.
pub fn parse_from_store(store: &dyn SourceStore, options: &ParseOptions) -> SchoolsResult<Payload> {
    observed(&store.describe(), options, || store.current())
}

fn observed<F>(source: &str, options: &ParseOptions, read: F) -> SchoolsResult<Payload>
where
    F: FnOnce() -> SchoolsResult<Vec<u8>>,
{
    let result = read().and_then(|bytes| read_first_sheet(&bytes)).map(|sheet| {
        let payload = parse_sheet(&sheet, options);
        let stats = ParseStats {
            format: detect_format(&sheet),
            rows: sheet.row_count(),
            schools: payload.meta.schools_count,
            districts: payload.meta.districts_count,
        };
        (payload, stats)
    });

    let Some(observer) = options.observer.as_ref() else {
        return result.map(|(payload, _)| payload);
    };
    match result {
        Ok((payload, stats)) => {
            observer.record(&ParseReport::parsed(source, stats));
            Ok(payload)
        }
        Err(e) => {
            observer.record(&ParseReport::failed(source, &e, options.alert_at_or_above));
            Err(e)
        }
    }
}
