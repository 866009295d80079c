use crate::config::toml_config::TomlConfig;
use crate::config::ConversionSettings;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tabla2json")]
#[command(about = "Convert a CSV or XLSX table into a JSON document with conversion metadata")]
pub struct CliConfig {
    /// Input table (.csv or .xlsx) [default: datos_prueba.csv]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output JSON file, replaced if it exists [default: salida.json]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Column whose values are rewritten as YYYY-MM-DD [default: Fecha_Compra]
    #[arg(long)]
    pub date_column: Option<String>,

    /// TOML file with [input], [output] and [transform] sections
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log memory and CPU usage per stage")]
    pub monitor: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with flags; flags given on the command line win.
    pub fn resolve(&self) -> Result<(ConversionSettings, bool)> {
        let (base, toml_monitor) = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let toml = TomlConfig::from_file(path)?;
                (toml.to_settings(), toml.monitoring_enabled())
            }
            None => (ConversionSettings::default(), false),
        };

        let settings = ConversionSettings {
            input_path: self.input.clone().unwrap_or(base.input_path),
            output_path: self.output.clone().unwrap_or(base.output_path),
            date_column: self.date_column.clone().unwrap_or(base.date_column),
        };

        Ok((settings, self.monitor || toml_monitor))
    }
}
