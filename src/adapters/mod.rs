// Adapters layer: concrete storage and the per-format table readers.

pub mod csv_reader;
pub mod storage;
pub mod xlsx_reader;

use crate::domain::model::{InputFormat, Table};
use crate::utils::error::Result;
use std::collections::HashSet;

pub use storage::LocalStorage;

/// Parses raw file bytes into a table using the reader for `format`.
pub fn read_table(format: InputFormat, bytes: Vec<u8>) -> Result<Table> {
    match format {
        InputFormat::Csv => csv_reader::read_table(&bytes),
        InputFormat::Xlsx => xlsx_reader::read_table(bytes),
    }
}

/// Names blank headers `Unnamed: <index>` and suffixes repeats with `.1`, `.2`, ...
pub(crate) fn normalize_headers<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut used = HashSet::new();
    let mut headers = Vec::new();

    for (index, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {}", index)
        } else {
            name
        };

        let mut candidate = base.clone();
        let mut suffix = 0;
        while used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}.{}", base, suffix);
        }

        used.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
