//! Final payload shaping.

use crate::types::{CellValue, District, Payload, PayloadMeta, School};

/// Build the payload from a header row and already reconciled districts.
///
/// Districts are stably sorted so that registered ids come first in ascending order and
/// null-id entries follow in their existing order. Schools are kept as given.
pub fn assemble(
    columns: Vec<CellValue>,
    mut districts: Vec<District>,
    schools: Vec<School>,
) -> Payload {
    sort_districts(&mut districts);
    Payload {
        meta: PayloadMeta {
            columns,
            districts_count: districts.len(),
            schools_count: schools.len(),
        },
        districts,
        schools,
    }
}

/// Stable sort by `(id.is_none(), id)`.
pub fn sort_districts(districts: &mut [District]) {
    districts.sort_by_key(|d| (d.id.is_none(), d.id));
}
