//! `schools-map-ingest` turns a spreadsheet of schools grouped by district into a normalized
//! [`types::Payload`] for a read API.
//!
//! The primary entrypoints are [`ingestion::parse_workbook_bytes`] and
//! [`ingestion::parse_from_store`]. Each call is a pure function of the workbook bytes and the
//! district registry; nothing is cached.
//!
//! ## Pipeline
//!
//! 1. **Decode** the first worksheet into raw [`types::CellValue`]s (`calamine`).
//! 2. **Detect** the layout from the column count alone: 13 or more columns is the flat layout,
//!    anything narrower is the legacy layout. Header text is never trusted.
//! 3. **Extract** schools (and districts) with [`ingestion::legacy`] or [`ingestion::flat`],
//!    using the tolerant conversions in [`coerce`].
//! 4. **Reconcile** districts against the [`registry::DistrictRegistry`] so every registered
//!    district appears exactly once.
//! 5. **Assemble** the payload: registered districts sorted by id, then unregistered ones in
//!    encounter order; schools in row order.
//!
//! Malformed cells become `None`, malformed rows are skipped. Only a missing or undecodable
//! workbook is an error ([`SchoolsError`]).
//!
//! ## Quick example
//!
//! ```rust
//! use schools_map_ingest::ingestion::{parse_sheet, ParseOptions, Sheet};
//! use schools_map_ingest::types::CellValue;
//!
//! let sheet = Sheet::from_rows(vec![
//!     vec![CellValue::text("№"), CellValue::text("Наименование")],
//!     vec![CellValue::Empty, CellValue::text("Наурское РУО")],
//!     vec![CellValue::Int(1), CellValue::text("СОШ №1"), CellValue::Int(1), CellValue::Int(800)],
//! ]);
//!
//! let payload = parse_sheet(&sheet, &ParseOptions::default());
//! assert_eq!(payload.schools[0].district.as_deref(), Some("Наурское РУО"));
//! assert_eq!(payload.meta.districts_count, 22);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: workbook decoding, layout detection, extractors, entry points, observers
//! - [`processing`]: registry reconciliation, payload assembly, read helpers
//! - [`coerce`]: total cell conversions
//! - [`registry`]: the `name -> id` district table
//! - [`source`]: the current-workbook store
//! - [`types`]: data model
//! - [`error`]: error type

pub mod coerce;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod registry;
pub mod source;
pub mod types;

pub use error::{SchoolsError, SchoolsResult};
