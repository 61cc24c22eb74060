use crate::core::{GroupingResult, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: String,
    pub result: GroupingResult,
}

pub struct GroupingEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> GroupingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting anagram grouping...");
        self.monitor.log_stats("Start");

        // Extract
        let words = self.pipeline.extract().await?;
        tracing::info!("Extracted {} words", words.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(words).await?;
        tracing::info!(
            "Grouped {} words into {} groups",
            result.total_words,
            result.groups.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(result.clone()).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunOutcome {
            output_path,
            result,
        })
    }
}
