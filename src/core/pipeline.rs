use crate::adapters;
use crate::core::normalize::normalize_date_column;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{InputFormat, Metadata, OutputDocument, Table};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub struct ConverterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConverterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConverterPipeline<S, C> {
    fn extract(&self) -> Result<Table> {
        let input_path = self.config.input_path();
        let format = InputFormat::detect(input_path)?;
        tracing::debug!("Detected {:?} input for {}", format, input_path);

        let bytes = self.storage.read_file(input_path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), input_path);

        adapters::read_table(format, bytes)
    }

    fn transform(&self, mut table: Table) -> Result<OutputDocument> {
        normalize_date_column(&mut table, self.config.date_column())?;

        let metadata = Metadata {
            fuente_original: self.config.input_path().to_string(),
            fecha_conversion: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            registros_procesados: table.rows.len(),
        };

        Ok(OutputDocument {
            metadata,
            datos: table.rows,
        })
    }

    fn load(&self, document: OutputDocument) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        let json = to_json_bytes(&document)?;
        tracing::debug!("Writing {} bytes to {}", json.len(), output_path);
        self.storage.write_file(&output_path, &json)?;

        Ok(output_path)
    }
}

/// Pretty JSON with four-space indentation. Non-ASCII text is written as UTF-8, not escaped.
pub fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}
