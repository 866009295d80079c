pub mod etl;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{OutputDocument, Record, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::adapters::LocalStorage;
use crate::config::ConversionSettings;
use crate::domain::model::InputFormat;
use crate::utils::validation::Validate;

/// Converts `input_path` (`.csv` or `.xlsx`) into the JSON document at `output_path`.
pub fn convert(input_path: &str, output_path: &str) -> Result<String> {
    run_with_settings(ConversionSettings::new(input_path, output_path), false)
}

pub fn run_with_settings(settings: ConversionSettings, monitor_enabled: bool) -> Result<String> {
    // an empty or extension-less input is a format error before any other check
    InputFormat::detect(&settings.input_path)?;
    settings.validate()?;
    let pipeline = pipeline::ConverterPipeline::new(LocalStorage::default(), settings);
    etl::EtlEngine::new_with_monitoring(pipeline, monitor_enabled).run()
}
