//! Tolerant conversions from raw [`CellValue`]s into typed, possibly-null values.
//!
//! Every function here is total: malformed input yields `None` (or `false`), never an error.

use std::collections::BTreeSet;

use crate::types::CellValue;

/// The set of words that mark a yes/no cell as affirmative.
///
/// Matching is done on the trimmed, lowercased cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffirmativeWords {
    words: BTreeSet<String>,
}

impl AffirmativeWords {
    /// Build a word set. Words are trimmed and lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The single-word set used by older sheets: only "да".
    pub fn legacy() -> Self {
        Self::new(["да"])
    }

    /// Returns `true` if `word` (already normalized) is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for AffirmativeWords {
    fn default() -> Self {
        Self::new(["да", "yes", "true", "1"])
    }
}

/// `true` for a blank cell or a floating-point NaN.
pub fn is_missing(v: &CellValue) -> bool {
    match v {
        CellValue::Empty => true,
        CellValue::Float(f) => f.is_nan(),
        _ => false,
    }
}

/// `false` if missing, or if text that is blank after trimming.
pub fn is_filled(v: &CellValue) -> bool {
    match v {
        CellValue::Text(s) => !s.trim().is_empty(),
        other => !is_missing(other),
    }
}

/// Integer conversion. Floats are truncated toward zero.
pub fn to_int(v: &CellValue) -> Option<i64> {
    if is_missing(v) {
        return None;
    }
    match v {
        CellValue::Int(i) => Some(*i),
        CellValue::Float(f) => float_to_i64(*f),
        CellValue::Bool(b) => Some(i64::from(*b)),
        CellValue::Text(s) => s.trim().parse::<i64>().ok(),
        CellValue::Empty => None,
    }
}

/// Floating-point conversion. Only finite values come back; `"nan"`, `"inf"` and friends are
/// `None`.
pub fn to_float(v: &CellValue) -> Option<f64> {
    match v {
        CellValue::Int(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f).filter(|f| f.is_finite()),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        CellValue::Text(s) => parse_finite(s),
        CellValue::Empty => None,
    }
}

/// Stringify and trim; blank results become `None`.
pub fn to_text(v: &CellValue) -> Option<String> {
    if is_missing(v) {
        return None;
    }
    let text = v.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// `true` iff the trimmed, lowercased text is one of `words`.
pub fn to_affirmative_bool(v: &CellValue, words: &AffirmativeWords) -> bool {
    match to_text(v) {
        Some(text) => words.contains(&text.to_lowercase()),
        None => false,
    }
}

/// Parse `"lat, lon"` (comma or semicolon separated) into a coordinate pair.
///
/// Exactly two finite numeric parts are required. No range checks are applied.
pub fn parse_coordinate_pair(v: &CellValue) -> Option<(f64, f64)> {
    let text = to_text(v)?;
    let parts: Vec<&str> = text.split([',', ';']).collect();
    let [lat, lon] = parts.as_slice() else {
        return None;
    };
    Some((parse_finite(lat)?, parse_finite(lon)?))
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn float_to_i64(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if t >= -(i64::MAX as f64) - 1.0 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}
