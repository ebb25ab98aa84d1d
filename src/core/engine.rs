use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct BundleEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> BundleEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting bundle process...");
        self.monitor.log_stats("Startup");

        // Extract
        println!("Scanning documentation tree...");
        let documents = self.pipeline.extract().await?;
        println!("Found {} markdown files", documents.len());
        self.monitor.log_stats("Scan");

        // Transform
        println!("Assembling bundle...");
        let result = self.pipeline.transform(documents).await?;
        println!("Assembled {} file blocks", result.entries.len());
        self.monitor.log_stats("Assemble");

        // Load
        println!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
