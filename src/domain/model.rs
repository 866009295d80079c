use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Column holding the purchase date rewritten to `YYYY-MM-DD`.
pub const DEFAULT_DATE_COLUMN: &str = "Fecha_Compra";
pub const DEFAULT_INPUT_PATH: &str = "datos_prueba.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "salida.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Xlsx,
}

impl InputFormat {
    /// Picks the reader from the file extension. The match is case-sensitive.
    pub fn detect(path: &str) -> Result<Self> {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Ok(InputFormat::Csv),
            Some("xlsx") => Ok(InputFormat::Xlsx),
            Some(other) => Err(ConvertError::UnsupportedFormat {
                extension: format!(".{}", other),
            }),
            None => Err(ConvertError::UnsupportedFormat {
                extension: "sin extensión".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.data.get(column)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub fuente_original: String,
    pub fecha_conversion: String,
    pub registros_procesados: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub metadata: Metadata,
    pub datos: Vec<Record>,
}
