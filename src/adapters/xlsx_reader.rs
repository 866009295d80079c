use crate::adapters::normalize_headers;
use crate::domain::model::{Record, Table};
use crate::utils::error::{ConvertError, Result};
use calamine::{Data, DataType, Reader, Xlsx};
use serde_json::{Map, Number, Value};
use std::io::Cursor;

/// Reads the first worksheet of an XLSX workbook; its first row is the header.
pub fn read_table(bytes: Vec<u8>) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ConvertError::ProcessingError {
            message: "No worksheet found in XLSX file".to_string(),
        })??;

    tracing::debug!(
        "Read worksheet range {}x{}",
        range.height(),
        range.width()
    );

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| ConvertError::ProcessingError {
        message: "XLSX worksheet is empty".to_string(),
    })?;
    let columns = normalize_headers(header.iter().map(header_name));

    let mut cells: Vec<Vec<Value>> = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    for col in 0..columns.len() {
        if is_whole_number_column(cells.iter().map(|row| &row[col])) {
            for row in cells.iter_mut() {
                if let Some(f) = row[col].as_f64() {
                    row[col] = Value::from(f as i64);
                }
            }
        }
    }

    let rows = cells
        .into_iter()
        .map(|row| Record {
            data: columns.iter().cloned().zip(row).collect::<Map<_, _>>(),
        })
        .collect();

    Ok(Table { columns, rows })
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::Error(e) => Value::String(e.to_string()),
        other => match other.as_datetime() {
            Some(dt) => Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => Value::String(other.to_string()),
        },
    }
}

// Excel stores every number as a float; columns of whole numbers read back as integers.
fn is_whole_number_column<'a, I>(values: I) -> bool
where
    I: Iterator<Item = &'a Value>,
{
    let mut saw_float = false;
    for value in values {
        match value {
            Value::Null => {}
            Value::Number(n) if n.is_i64() => {}
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => saw_float = true,
                _ => return false,
            },
            _ => return false,
        }
    }
    saw_float
}
