use crate::adapters::normalize_headers;
use crate::domain::model::{Record, Table};
use crate::utils::error::{ConvertError, Result};
use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
}

/// Parses CSV bytes exported as Windows-1252 (a Latin-1 superset).
///
/// The first record is the header. Files starting with a UTF-8 byte order
/// mark are decoded as UTF-8 instead. Each column is typed as a whole:
/// integers, floats or booleans when every non-empty cell agrees, text
/// otherwise. Empty cells become `null`.
pub fn read_table(bytes: &[u8]) -> Result<Table> {
    let (text, encoding, had_errors) = WINDOWS_1252.decode(bytes);
    tracing::debug!("Decoded CSV input as {}", encoding.name());
    if had_errors {
        tracing::warn!("CSV input contained bytes outside {}", encoding.name());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if raw_headers.is_empty() {
        return Err(ConvertError::ProcessingError {
            message: "CSV file has no header row".to_string(),
        });
    }
    let columns = normalize_headers(raw_headers);

    let mut cells: Vec<Vec<Option<String>>> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > columns.len() {
            return Err(ConvertError::ProcessingError {
                message: format!(
                    "CSV row {} has {} fields, header has {}",
                    index + 1,
                    record.len(),
                    columns.len()
                ),
            });
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        row.resize(columns.len(), None);
        cells.push(row);
    }

    let column_types: Vec<ColumnType> = (0..columns.len())
        .map(|col| infer_column_type(cells.iter().filter_map(|row| row[col].as_deref())))
        .collect();

    let rows = cells
        .into_iter()
        .map(|row| {
            let mut data = Map::new();
            for ((name, column_type), cell) in columns.iter().zip(&column_types).zip(row) {
                data.insert(name.clone(), typed_value(*column_type, cell));
            }
            Record { data }
        })
        .collect();

    Ok(Table { columns, rows })
}

fn infer_column_type<'a, I>(values: I) -> ColumnType
where
    I: Iterator<Item = &'a str> + Clone,
{
    let mut values = values.peekable();
    if values.peek().is_none() {
        return ColumnType::Text;
    }

    if values.clone().all(|v| v.parse::<i64>().is_ok()) {
        ColumnType::Integer
    } else if values.clone().all(is_float) {
        ColumnType::Float
    } else if values.all(|v| parse_bool(v).is_some()) {
        ColumnType::Boolean
    } else {
        ColumnType::Text
    }
}

// "inf" and "NaN" parse as f64 but are words, not numbers
fn is_float(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit()) && value.parse::<f64>().is_ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn typed_value(column_type: ColumnType, cell: Option<String>) -> Value {
    let Some(cell) = cell else {
        return Value::Null;
    };

    match column_type {
        ColumnType::Integer => cell.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
        ColumnType::Float => cell
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ColumnType::Boolean => parse_bool(&cell).map(Value::Bool).unwrap_or(Value::Null),
        ColumnType::Text => Value::String(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_header_and_rows_in_order() {
        let input = b"Cliente,Ciudad\nAna,Lima\nLuis,Quito\n";
        let table = read_table(input).unwrap();

        assert_eq!(table.columns, vec!["Cliente", "Ciudad"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("Cliente"), Some(&json!("Ana")));
        assert_eq!(table.rows[1].get("Ciudad"), Some(&json!("Quito")));
    }

    #[test]
    fn test_decodes_windows_1252_accents() {
        // "Peña" and "Almacén" as single-byte Windows-1252
        let input = b"Cliente,Tienda\nPe\xf1a,Almac\xe9n\n";
        let table = read_table(input).unwrap();

        assert_eq!(table.rows[0].get("Cliente"), Some(&json!("Peña")));
        assert_eq!(table.rows[0].get("Tienda"), Some(&json!("Almacén")));
    }

    #[test]
    fn test_utf8_bom_input_is_read_as_utf8() {
        let input = "\u{feff}Cliente\nPeña\n".as_bytes();
        let table = read_table(input).unwrap();

        assert_eq!(table.columns, vec!["Cliente"]);
        assert_eq!(table.rows[0].get("Cliente"), Some(&json!("Peña")));
    }

    #[test]
    fn test_column_type_inference() {
        let input = b"id,precio,activo,codigo\n1,10.5,true,A1\n2,3,FALSE,7\n";
        let table = read_table(input).unwrap();

        assert_eq!(table.rows[0].get("id"), Some(&json!(1)));
        assert_eq!(table.rows[1].get("precio"), Some(&json!(3.0)));
        assert_eq!(table.rows[0].get("activo"), Some(&json!(true)));
        assert_eq!(table.rows[1].get("activo"), Some(&json!(false)));
        // mixed column stays text
        assert_eq!(table.rows[1].get("codigo"), Some(&json!("7")));
    }

    #[test]
    fn test_nan_words_are_text() {
        let table = read_table(b"nota\nNaN\ninf\n").unwrap();
        assert_eq!(table.rows[0].get("nota"), Some(&json!("NaN")));
    }

    #[test]
    fn test_empty_and_missing_cells_are_null() {
        let input = b"id,nombre,total\n1,,5\n2,Ana\n";
        let table = read_table(input).unwrap();

        assert_eq!(table.rows[0].get("nombre"), Some(&Value::Null));
        assert_eq!(table.rows[1].get("total"), Some(&Value::Null));
        assert_eq!(table.rows[0].get("total"), Some(&json!(5)));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = read_table(b"id\n1\n\n2\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let table = read_table(b"nombre,nota\n\"Pe\xf1a, Ana\",\"dijo \"\"hola\"\"\"\n").unwrap();
        assert_eq!(table.rows[0].get("nombre"), Some(&json!("Peña, Ana")));
        assert_eq!(table.rows[0].get("nota"), Some(&json!("dijo \"hola\"")));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let table = read_table(b"id,nombre\n").unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_rejects_row_longer_than_header() {
        let err = read_table(b"a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, ConvertError::ProcessingError { .. }));
    }

    #[test]
    fn test_rejects_empty_file() {
        assert!(read_table(b"").is_err());
    }
}
