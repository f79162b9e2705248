#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::Workbook;

/// A cell to write into a generated test workbook.
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    /// Left unwritten.
    Blank,
    Text(&'a str),
    Num(f64),
}

pub use self::Cell::{Blank, Num, Text};

pub fn tmp_path(name: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("schools-map-ingest-{name}-{nanos}.{ext}"))
}

/// Build an `.xlsx` workbook in memory with one sheet holding `rows`.
pub fn xlsx_bytes(rows: &[Vec<Cell<'_>>]) -> Vec<u8> {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                Cell::Blank => {}
                Cell::Text(s) => {
                    ws.write_string(r, c, *s).unwrap();
                }
                Cell::Num(n) => {
                    ws.write_number(r, c, *n).unwrap();
                }
            }
        }
    }

    wb.save_to_buffer().unwrap()
}

pub fn legacy_header() -> Vec<Cell<'static>> {
    vec![
        Text("№ п/п"),
        Text("Наименование"),
        Text("Смен"),
        Text("Проектная мощность"),
        Text("Обучающихся"),
        Text("Работников"),
        Text("Учителей"),
        Text("Сайт"),
        Text("Госпрограмма"),
        Text("Адрес"),
        Text("Координаты"),
    ]
}

pub fn flat_header() -> Vec<Cell<'static>> {
    vec![
        Text("№"),
        Text("Школа"),
        Text("Смен"),
        Text("Мощность"),
        Text("Обучающихся"),
        Text("Работников"),
        Text("Учителей"),
        Text("Сайт"),
        Text("Широта"),
        Text("Долгота"),
        Text("Адрес"),
        Text("Район"),
        Text("Госпрограмма"),
    ]
}
