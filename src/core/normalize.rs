use crate::domain::model::Table;
use crate::utils::error::{ConvertError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

// Month-first layouts are tried before day-first ones, so `03/04/2024` is March 4.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%Y%m%d",
    "%m/%d/%y",
    "%d/%m/%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%Y",
];

/// Parses a date written in one of the common spreadsheet layouts.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDateTime::parse_from_str(text, fmt)
                .ok()
                .map(|dt| dt.date())
                .filter(has_full_year)
        })
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|fmt| {
                NaiveDate::parse_from_str(text, fmt)
                    .ok()
                    .filter(has_full_year)
            })
        })
}

// `%Y` also accepts a two-digit year, which belongs to the `%y` layouts.
fn has_full_year(date: &NaiveDate) -> bool {
    date.year() >= 1000
}

/// Rewrites one cell to `YYYY-MM-DD`. Nulls and blank strings pass through;
/// integers are read as compact `YYYYMMDD`. Returns `None` for anything
/// that is not a recognizable date.
pub fn normalize_date(value: &Value) -> Option<Value> {
    let date = match value {
        Value::Null => return Some(Value::Null),
        Value::String(s) if s.trim().is_empty() => return Some(value.clone()),
        Value::String(s) => parse_date(s)?,
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            NaiveDate::parse_from_str(&n.to_string(), "%Y%m%d").ok()?
        }
        _ => return None,
    };

    Some(Value::String(date.format(OUTPUT_FORMAT).to_string()))
}

/// Normalizes every value of `column` in place. A missing column is a no-op.
pub fn normalize_date_column(table: &mut Table, column: &str) -> Result<()> {
    if !table.has_column(column) {
        tracing::debug!("No '{}' column, dates left untouched", column);
        return Ok(());
    }

    for (index, record) in table.rows.iter_mut().enumerate() {
        let Some(value) = record.data.get_mut(column) else {
            continue;
        };

        let normalized = normalize_date(value).ok_or_else(|| ConvertError::InvalidDate {
            column: column.to_string(),
            row: index + 1,
            value: match &*value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })?;
        *value = normalized;
    }

    tracing::debug!("Normalized {} values in '{}'", table.len(), column);
    Ok(())
}
