//! Workbook ingestion.
//!
//! Most callers should use [`parse_workbook_bytes`] or [`parse_from_store`] (from [`unified`]),
//! which:
//!
//! - decode the first worksheet of the workbook ([`workbook`])
//! - pick a layout from the sheet width ([`detect`])
//! - extract schools and districts with the matching extractor ([`legacy`] or [`flat`])
//! - reconcile districts with the registry and assemble the payload
//! - optionally hand one [`ParseReport`] per call to a [`ParseObserver`]

pub mod detect;
pub mod extract;
pub mod flat;
pub mod legacy;
pub mod observability;
pub mod unified;
pub mod workbook;

pub use detect::{SheetFormat, detect_format};
pub use extract::{ExtractContext, Extraction, SheetExtractor};
pub use observability::{
    FileObserver, ParseObserver, ParseOutcome, ParseReport, ParseSeverity, ParseStats,
    StdErrObserver,
};
pub use unified::{
    ParseOptions, parse_from_path, parse_from_store, parse_sheet, parse_workbook_bytes,
};
pub use workbook::{Sheet, read_first_sheet};
