//! Legacy (hierarchical) layout.
//!
//! A district header row (no row id, name found in the registry, no site) opens a block; the
//! school rows that follow belong to it until the next header row.
//!
//! Columns: 0 row id, 1 name, 2 shift, 3 capacity, 4 students, 5 workers, 6 teachers,
//! 7 site, 8 state flag, 9 address, 10 coordinates (`"lat, lon"`).

use crate::coerce::{
    is_missing, parse_coordinate_pair, to_affirmative_bool, to_int, to_text,
};
use crate::types::{CellValue, District, School};

use super::extract::{ExtractContext, Extraction, SheetExtractor};
use super::workbook::{Sheet, cell};

const COL_ROW_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_SHIFT: usize = 2;
const COL_CAPACITY: usize = 3;
const COL_STUDENTS: usize = 4;
const COL_WORKERS: usize = 5;
const COL_TEACHERS: usize = 6;
const COL_SITE: usize = 7;
const COL_STATE: usize = 8;
const COL_ADDRESS: usize = 9;
const COL_COORDS: usize = 10;

/// Name of the grand-total row; never treated as a district.
const TOTAL_MARKER: &str = "всего";

/// How a single legacy row is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyRow {
    /// Opens a new district block.
    DistrictHeader(District),
    /// Blank separator line (no name).
    Separator,
    /// Subtotal or decorative line (no row id, no shift/capacity/students).
    Subtotal,
    /// A school; `district` is left `None` and filled from the scan state.
    School(School),
}

/// State threaded through the row fold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyScan {
    /// Name of the most recent district header, if any.
    pub current_district: Option<String>,
    pub extraction: Extraction,
}

impl LegacyScan {
    /// Apply one classified row.
    pub fn step(mut self, row: LegacyRow) -> Self {
        match row {
            LegacyRow::DistrictHeader(district) => {
                self.current_district = Some(district.name.clone());
                self.extraction.districts.push(district);
            }
            LegacyRow::Separator | LegacyRow::Subtotal => {}
            LegacyRow::School(mut school) => {
                school.district = self.current_district.clone();
                self.extraction.schools.push(school);
            }
        }
        self
    }
}

/// Extractor for the legacy layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyExtractor;

impl SheetExtractor for LegacyExtractor {
    fn extract(&self, sheet: &Sheet, ctx: ExtractContext<'_>) -> Extraction {
        scan_rows(sheet.data_rows(), LegacyScan::default(), ctx).extraction
    }
}

/// Fold `rows` into `initial`.
pub fn scan_rows<'r, I>(rows: I, initial: LegacyScan, ctx: ExtractContext<'_>) -> LegacyScan
where
    I: IntoIterator<Item = &'r [CellValue]>,
{
    rows.into_iter()
        .fold(initial, |scan, row| scan.step(classify_row(row, ctx)))
}

/// Classify one data row. Does not depend on previous rows.
pub fn classify_row(row: &[CellValue], ctx: ExtractContext<'_>) -> LegacyRow {
    let row_id_missing = is_missing(cell(row, COL_ROW_ID));
    let name = to_text(cell(row, COL_NAME));

    if row_id_missing {
        if let Some(name) = name.as_deref() {
            if is_district_header(name, cell(row, COL_SITE), ctx) {
                return LegacyRow::DistrictHeader(District {
                    id: ctx.registry.id_of(name),
                    name: name.to_owned(),
                    students: to_int(cell(row, COL_STUDENTS)),
                    workers: to_int(cell(row, COL_WORKERS)),
                    teachers: to_int(cell(row, COL_TEACHERS)),
                });
            }
        }
    }

    let Some(name) = name else {
        return LegacyRow::Separator;
    };

    if row_id_missing
        && [COL_SHIFT, COL_CAPACITY, COL_STUDENTS]
            .iter()
            .all(|&idx| is_missing(cell(row, idx)))
    {
        return LegacyRow::Subtotal;
    }

    LegacyRow::School(School {
        name,
        shift: to_int(cell(row, COL_SHIFT)),
        capacity: to_int(cell(row, COL_CAPACITY)),
        students: to_int(cell(row, COL_STUDENTS)),
        workers: to_int(cell(row, COL_WORKERS)),
        teachers: to_int(cell(row, COL_TEACHERS)),
        site: to_text(cell(row, COL_SITE)),
        district: None,
        is_state: to_affirmative_bool(cell(row, COL_STATE), ctx.affirmative),
        address: to_text(cell(row, COL_ADDRESS)),
        coords: parse_coordinate_pair(cell(row, COL_COORDS)),
    })
}

fn is_district_header(name: &str, site: &CellValue, ctx: ExtractContext<'_>) -> bool {
    name.to_lowercase() != TOTAL_MARKER && to_text(site).is_none() && ctx.registry.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::AffirmativeWords;
    use crate::registry::{DistrictRegistry, RegistryEntry};
    use crate::types::CellValue::{Empty, Float, Int};

    fn t(s: &str) -> CellValue {
        CellValue::text(s)
    }

    fn registry() -> DistrictRegistry {
        DistrictRegistry::from_entries(vec![
            RegistryEntry { name: "North".into(), id: 1 },
            RegistryEntry { name: "South".into(), id: 2 },
            RegistryEntry { name: "Всего".into(), id: 99 },
        ])
        .unwrap()
    }

    fn run(rows: Vec<Vec<CellValue>>) -> Extraction {
        let reg = registry();
        let words = AffirmativeWords::default();
        let ctx = ExtractContext { registry: &reg, affirmative: &words };
        let mut all = vec![vec![t("№"), t("Название")]];
        all.extend(rows);
        LegacyExtractor.extract(&Sheet::from_rows(all), ctx)
    }

    fn school_row(id: i64, name: &str) -> Vec<CellValue> {
        vec![
            Int(id),
            t(name),
            Int(1),
            Int(500),
            Int(420),
            Int(40),
            Int(30),
            t("https://school.example"),
            t("Да"),
            t("ул. Мира, 1"),
            t("43.1, 45.2"),
        ]
    }

    #[test]
    fn header_row_becomes_district_and_owns_following_schools() {
        let out = run(vec![
            vec![Empty, t("North"), Empty, Empty, Int(900), Int(80), Int(60)],
            school_row(1, "School A"),
            school_row(2, "School B"),
            vec![Empty, t("South"), Empty, Empty, Int(10), Int(2), Int(1)],
            school_row(3, "School C"),
        ]);

        assert_eq!(
            out.districts,
            vec![
                District {
                    id: Some(1),
                    name: "North".into(),
                    students: Some(900),
                    teachers: Some(60),
                    workers: Some(80),
                },
                District {
                    id: Some(2),
                    name: "South".into(),
                    students: Some(10),
                    teachers: Some(1),
                    workers: Some(2),
                },
            ]
        );
        let owners: Vec<_> = out
            .schools
            .iter()
            .map(|s| (s.name.as_str(), s.district.as_deref()))
            .collect();
        assert_eq!(
            owners,
            vec![
                ("School A", Some("North")),
                ("School B", Some("North")),
                ("School C", Some("South")),
            ]
        );
    }

    #[test]
    fn school_fields_are_coerced() {
        let out = run(vec![school_row(1, "  School A ")]);
        let school = &out.schools[0];
        assert_eq!(school.name, "School A");
        assert_eq!(school.shift, Some(1));
        assert_eq!(school.capacity, Some(500));
        assert_eq!(school.students, Some(420));
        assert_eq!(school.workers, Some(40));
        assert_eq!(school.teachers, Some(30));
        assert_eq!(school.site.as_deref(), Some("https://school.example"));
        assert!(school.is_state);
        assert_eq!(school.address.as_deref(), Some("ул. Мира, 1"));
        assert_eq!(school.coords, Some((43.1, 45.2)));
        assert_eq!(school.district, None);
    }

    #[test]
    fn schools_before_any_header_have_no_district() {
        let out = run(vec![
            school_row(1, "Orphan"),
            vec![Empty, t("North")],
            school_row(2, "Owned"),
        ]);
        assert_eq!(out.schools[0].district, None);
        assert_eq!(out.schools[1].district.as_deref(), Some("North"));
    }

    #[test]
    fn header_requires_missing_row_id_blank_site_and_registry_match() {
        let out = run(vec![
            // Has a row id: a school that happens to share a district name.
            vec![Int(7), t("North"), Int(1)],
            // Has a site.
            vec![Empty, t("South"), Int(1), Empty, Empty, Empty, Empty, t("http://x")],
            // Unknown name, no numbers: subtotal.
            vec![Empty, t("Unknown district")],
        ]);
        assert!(out.districts.is_empty());
        let names: Vec<_> = out.schools.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["North", "South"]);
    }

    #[test]
    fn total_marker_is_never_a_district() {
        let out = run(vec![vec![Empty, t("ВСЕГО"), Empty, Empty, Int(5000)]]);
        assert!(out.districts.is_empty());
        // Falls through to the subtotal check: students present, so it is kept as a school.
        assert_eq!(out.schools.len(), 1);

        let out = run(vec![vec![Empty, t("Всего")]]);
        assert!(out.districts.is_empty());
        assert!(out.schools.is_empty());
    }

    #[test]
    fn separators_and_subtotals_are_skipped() {
        let out = run(vec![
            vec![Int(1)],
            vec![],
            vec![Empty, t("   ")],
            vec![Empty, t("Итого по району"), Empty, Float(f64::NAN), Empty, Int(3)],
        ]);
        assert!(out.schools.is_empty());
        assert!(out.districts.is_empty());
    }

    #[test]
    fn missing_row_id_with_numbers_is_still_a_school() {
        let out = run(vec![vec![Empty, t("Filial"), Empty, Int(100)]]);
        assert_eq!(out.schools.len(), 1);
        assert_eq!(out.schools[0].capacity, Some(100));
    }

    #[test]
    fn scan_continues_from_given_state() {
        let reg = registry();
        let words = AffirmativeWords::default();
        let ctx = ExtractContext { registry: &reg, affirmative: &words };

        let initial = LegacyScan {
            current_district: Some("South".into()),
            extraction: Extraction::default(),
        };
        let row = school_row(1, "Continued");
        let scan = scan_rows([row.as_slice()], initial, ctx);
        assert_eq!(scan.extraction.schools[0].district.as_deref(), Some("South"));
        assert_eq!(scan.current_district.as_deref(), Some("South"));
    }
}
