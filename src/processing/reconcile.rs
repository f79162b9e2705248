//! Merging extracted districts with the registry.

use std::collections::HashMap;

use crate::registry::DistrictRegistry;
use crate::types::District;

/// Union of `districts` and the registry, deduplicated by exact name.
///
/// - Extracted entries keep their position; repeated names are merged into the first entry
///   (headcounts summed, first non-null id kept).
/// - A registry entry whose name was extracted only fills in a missing id.
/// - Registry entries never mentioned are appended in registry order with zero headcounts.
pub fn reconcile(districts: Vec<District>, registry: &DistrictRegistry) -> Vec<District> {
    let mut merged: Vec<District> = Vec::with_capacity(districts.len() + registry.len());
    let mut by_name: HashMap<String, usize> = HashMap::with_capacity(merged.capacity());

    for district in districts {
        match by_name.get(&district.name) {
            Some(&pos) => absorb(&mut merged[pos], district),
            None => {
                by_name.insert(district.name.clone(), merged.len());
                merged.push(district);
            }
        }
    }

    for entry in registry.iter() {
        match by_name.get(&entry.name) {
            Some(&pos) => {
                let existing = &mut merged[pos];
                if existing.id.is_none() {
                    existing.id = Some(entry.id);
                }
            }
            None => {
                by_name.insert(entry.name.clone(), merged.len());
                merged.push(District::zeroed(Some(entry.id), entry.name.clone()));
            }
        }
    }

    merged
}

fn absorb(into: &mut District, other: District) {
    into.id = into.id.or(other.id);
    into.students = sum_known(into.students, other.students);
    into.teachers = sum_known(into.teachers, other.teachers);
    into.workers = sum_known(into.workers, other.workers);
}

fn sum_known(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.saturating_add(b)),
        (a, b) => a.or(b),
    }
}
