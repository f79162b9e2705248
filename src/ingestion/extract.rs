//! Shared extractor interface.
//!
//! Both sheet layouts are handled by a [`SheetExtractor`]; which one runs is decided by
//! [`super::detect::detect_format`].

use crate::coerce::AffirmativeWords;
use crate::registry::DistrictRegistry;
use crate::types::{District, School};

use super::workbook::Sheet;

/// Read-only inputs an extractor needs besides the sheet itself.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub registry: &'a DistrictRegistry,
    pub affirmative: &'a AffirmativeWords,
}

/// Records produced by one extraction pass, in row-encounter order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    pub districts: Vec<District>,
    pub schools: Vec<School>,
}

/// Turns the data rows of a sheet into schools and (observed or synthesized) districts.
pub trait SheetExtractor {
    fn extract(&self, sheet: &Sheet, ctx: ExtractContext<'_>) -> Extraction;
}
