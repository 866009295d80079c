use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Runs extract, transform and load once, in order. Returns the output path.
    pub fn run(&self) -> Result<String> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);

        tracing::info!("Extracting table...");
        let table = self.pipeline.extract()?;
        tracing::info!("Extracted {} records ({} columns)", table.len(), table.columns.len());
        monitor.log_stats("extract");

        tracing::info!("Transforming table...");
        let document = self.pipeline.transform(table)?;
        tracing::info!("Assembled {} records", document.metadata.registros_procesados);
        monitor.log_stats("transform");

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(document)?;
        tracing::info!("Output saved to: {}", output_path);
        monitor.log_stats("load");

        monitor.log_final_stats();
        Ok(output_path)
    }
}
