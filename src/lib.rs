pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::ConversionSettings;
pub use crate::core::{convert, etl::EtlEngine, pipeline::ConverterPipeline, run_with_settings};
pub use utils::error::{ConvertError, ErrorKind, Result};
