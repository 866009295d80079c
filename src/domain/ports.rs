use crate::domain::model::{OutputDocument, Table};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn date_column(&self) -> &str;
}

/// The three conversion stages, run strictly in order by the engine.
pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<OutputDocument>;
    fn load(&self, document: OutputDocument) -> Result<String>;
}
