use thiserror::Error;

/// Failure category reported on the console and mapped to the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    Format,
    Unexpected,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Unexpected => 1,
            ErrorKind::InputNotFound => 2,
            ErrorKind::Format => 3,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Formato de archivo no soportado. Use .xlsx o .csv (recibido: {extension})")]
    UnsupportedFormat { extension: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("XLSX processing error: {0}")]
    XlsxError(#[from] calamine::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid date in column '{column}' at row {row}: {value}")]
    InvalidDate {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InputNotFound { .. } => ErrorKind::InputNotFound,
            ConvertError::UnsupportedFormat { .. } => ErrorKind::Format,
            _ => ErrorKind::Unexpected,
        }
    }

    /// Single console line describing the failure.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InputNotFound { path } => format!(
                "Error: No se encontró el archivo '{}'. Asegúrate de que esté en la misma carpeta.",
                path
            ),
            ConvertError::UnsupportedFormat { .. } => format!("Error de formato: {}", self),
            other => format!("Ocurrió un error inesperado: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
