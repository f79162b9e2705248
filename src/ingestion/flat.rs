//! Flat layout: every row is a school carrying its district name.
//!
//! Columns: 0 serial (ignored), 1 name, 2 shift, 3 capacity, 4 students, 5 workers,
//! 6 teachers, 7 site, 8 latitude, 9 longitude, 10 address, 11 district, 12 state flag.
//!
//! A row is kept only when every column from 1 to 12 is filled. District aggregates are
//! summed from the accepted schools.

use std::collections::HashMap;

use crate::coerce::{is_filled, to_affirmative_bool, to_float, to_int, to_text};
use crate::registry::DistrictRegistry;
use crate::types::{CellValue, District, School};

use super::extract::{ExtractContext, Extraction, SheetExtractor};
use super::workbook::{Sheet, cell};

const COL_NAME: usize = 1;
const COL_SHIFT: usize = 2;
const COL_CAPACITY: usize = 3;
const COL_STUDENTS: usize = 4;
const COL_WORKERS: usize = 5;
const COL_TEACHERS: usize = 6;
const COL_SITE: usize = 7;
const COL_LAT: usize = 8;
const COL_LON: usize = 9;
const COL_ADDRESS: usize = 10;
const COL_DISTRICT: usize = 11;
const COL_STATE: usize = 12;

const REQUIRED_COLUMNS: [usize; 12] = [
    COL_NAME,
    COL_SHIFT,
    COL_CAPACITY,
    COL_STUDENTS,
    COL_WORKERS,
    COL_TEACHERS,
    COL_SITE,
    COL_LAT,
    COL_LON,
    COL_ADDRESS,
    COL_DISTRICT,
    COL_STATE,
];

/// Extractor for the flat layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtractor;

impl SheetExtractor for FlatExtractor {
    fn extract(&self, sheet: &Sheet, ctx: ExtractContext<'_>) -> Extraction {
        let schools: Vec<School> = sheet
            .data_rows()
            .filter_map(|row| school_from_row(row, ctx))
            .collect();
        let districts = synthesize_districts(&schools, ctx.registry);
        Extraction { districts, schools }
    }
}

/// Build a school from a fully populated row; `None` if any required cell is blank.
pub fn school_from_row(row: &[CellValue], ctx: ExtractContext<'_>) -> Option<School> {
    if !REQUIRED_COLUMNS.iter().all(|&idx| is_filled(cell(row, idx))) {
        return None;
    }

    let coords = match (to_float(cell(row, COL_LAT)), to_float(cell(row, COL_LON))) {
        (Some(lat), Some(lon)) => Some((lat, lon)),
        _ => None,
    };

    Some(School {
        name: to_text(cell(row, COL_NAME))?,
        shift: to_int(cell(row, COL_SHIFT)),
        capacity: to_int(cell(row, COL_CAPACITY)),
        students: to_int(cell(row, COL_STUDENTS)),
        workers: to_int(cell(row, COL_WORKERS)),
        teachers: to_int(cell(row, COL_TEACHERS)),
        site: to_text(cell(row, COL_SITE)),
        district: to_text(cell(row, COL_DISTRICT)),
        is_state: to_affirmative_bool(cell(row, COL_STATE), ctx.affirmative),
        address: to_text(cell(row, COL_ADDRESS)),
        coords,
    })
}

/// Group schools by district name and sum their headcounts.
///
/// Districts appear in order of first mention. Missing school headcounts count as 0.
pub fn synthesize_districts(schools: &[School], registry: &DistrictRegistry) -> Vec<District> {
    let mut districts: Vec<District> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for school in schools {
        let Some(name) = school.district.as_deref().map(str::trim) else {
            continue;
        };
        let pos = *by_name.entry(name).or_insert_with(|| {
            districts.push(District::zeroed(registry.id_of(name), name));
            districts.len() - 1
        });
        let district = &mut districts[pos];
        district.students = add_count(district.students, school.students);
        district.workers = add_count(district.workers, school.workers);
        district.teachers = add_count(district.teachers, school.teachers);
    }

    districts
}

fn add_count(total: Option<i64>, value: Option<i64>) -> Option<i64> {
    Some(total.unwrap_or(0).saturating_add(value.unwrap_or(0)))
}
