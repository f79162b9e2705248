//! The district registry: a read-only, ordered `name -> id` table of known districts.
//!
//! Names are matched exactly (no trimming, no case folding), so the key strings must be kept
//! verbatim, punctuation variants included.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SchoolsError, SchoolsResult};

const BUILTIN_REGISTRY_JSON: &str = include_str!("../data/district_registry.json");

/// One registry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub id: i64,
}

/// Ordered name -> id lookup table.
///
/// Iteration order is the order entries were supplied in; districts synthesized from the
/// registry are appended in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl DistrictRegistry {
    /// Build a registry from entries. Duplicate names are rejected.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> SchoolsResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), pos).is_some() {
                return Err(SchoolsError::Registry {
                    message: format!("duplicate district name '{}'", entry.name),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Parse a JSON array of `{ "name": ..., "id": ... }` objects.
    pub fn from_json_str(json: &str) -> SchoolsResult<Self> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a registry JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> SchoolsResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The registry shipped with the crate.
    pub fn builtin() -> Self {
        let entries: Vec<RegistryEntry> =
            serde_json::from_str(BUILTIN_REGISTRY_JSON).unwrap_or_default();
        Self::from_entries(entries).unwrap_or_else(|_| Self::empty())
    }

    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Exact-name lookup.
    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&pos| self.entries[pos].id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DistrictRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_keeps_verbatim_keys() {
        let reg = DistrictRegistry::builtin();
        assert_eq!(reg.len(), 22);
        assert_eq!(reg.id_of("Наурское РУО"), Some(13));
        assert_eq!(
            reg.id_of("МУ»Управление образования Гудермесского муниципального района»"),
            Some(12)
        );
        assert_eq!(reg.id_of("МУ «Грозненское РУО»"), Some(10));
        // Exact match only.
        assert_eq!(reg.id_of("наурское руо"), None);
        assert_eq!(reg.id_of(" Наурское РУО"), None);
    }

    #[test]
    fn builtin_registry_preserves_order() {
        let ids: Vec<i64> = DistrictRegistry::builtin().iter().map(|e| e.id).collect();
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&25));
        assert_eq!(ids[19..].to_vec(), vec![20, 24, 25]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = DistrictRegistry::from_json_str(
            r#"[{"name":"A","id":1},{"name":"A","id":2}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate district name 'A'"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = DistrictRegistry::from_json_str(r#"{"A": 1}"#).unwrap_err();
        assert!(matches!(err, SchoolsError::Json(_)));
    }
}
