#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_DATE_COLUMN, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};

/// Resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSettings {
    pub input_path: String,
    pub output_path: String,
    pub date_column: String,
}

impl ConversionSettings {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            date_column: DEFAULT_DATE_COLUMN.to_string(),
        }
    }

    pub fn with_date_column(mut self, date_column: impl Into<String>) -> Self {
        self.date_column = date_column.into();
        self
    }
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl ConfigProvider for ConversionSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn date_column(&self) -> &str {
        &self.date_column
    }
}

impl Validate for ConversionSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input_path)?;
        validate_path("output.path", &self.output_path)?;
        validate_non_empty_string("transform.date_column", &self.date_column)?;
        Ok(())
    }
}
