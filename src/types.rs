//! Core data model types.
//!
//! Raw spreadsheet cells are decoded into [`CellValue`]s; extraction turns rows of cells into
//! [`School`] and [`District`] records, and assembly wraps them in a [`Payload`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single raw spreadsheet cell, before coercion.
///
/// `Float(NaN)` is treated the same as [`CellValue::Empty`] by the coercion helpers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank cell (or a cell that could not be represented).
    #[default]
    Empty,
    /// Integer cell.
    Int(i64),
    /// Floating point cell.
    Float(f64),
    /// Boolean cell.
    Bool(bool),
    /// Text cell, untrimmed.
    Text(String),
}

impl CellValue {
    /// Shorthand for a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// A school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub shift: Option<i64>,
    pub capacity: Option<i64>,
    pub students: Option<i64>,
    pub workers: Option<i64>,
    pub teachers: Option<i64>,
    pub site: Option<String>,
    /// Free-text district name; may not match any [`District::name`].
    pub district: Option<String>,
    pub is_state: bool,
    pub address: Option<String>,
    /// `(latitude, longitude)`, serialized as a two-element array.
    pub coords: Option<(f64, f64)>,
}

/// An administrative district with aggregate headcounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    /// Registry id; `None` when the name is not in the registry.
    pub id: Option<i64>,
    /// Unique join key (exact match, case and punctuation sensitive).
    pub name: String,
    pub students: Option<i64>,
    pub teachers: Option<i64>,
    pub workers: Option<i64>,
}

impl District {
    /// A district with all aggregates zero, as synthesized from the registry.
    pub fn zeroed(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            students: Some(0),
            teachers: Some(0),
            workers: Some(0),
        }
    }
}

/// Summary block of a [`Payload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadMeta {
    /// Header row values, verbatim. Not interpreted.
    pub columns: Vec<CellValue>,
    pub districts_count: usize,
    pub schools_count: usize,
}

/// The normalized result of one parse call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub meta: PayloadMeta,
    pub districts: Vec<District>,
    pub schools: Vec<School>,
}
