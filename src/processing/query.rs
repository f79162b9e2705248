//! Read helpers over a parsed [`Payload`].

use crate::types::{District, Payload, School};

impl Payload {
    /// District with the given registry id.
    pub fn district_by_id(&self, id: i64) -> Option<&District> {
        self.districts.iter().find(|d| d.id == Some(id))
    }

    /// Schools whose `district` equals the name of the district with `id`.
    ///
    /// Returns `None` if no district has that id. Matching is exact.
    pub fn schools_in_district(&self, id: i64) -> Option<Vec<&School>> {
        let district = self.district_by_id(id)?;
        Some(
            self.schools
                .iter()
                .filter(|s| s.district.as_deref() == Some(district.name.as_str()))
                .collect(),
        )
    }
}
