//! Reporting helpers for search runs.

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
}

/// Summary of a run, written as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub instance: String,
    /// Cost as rendered by the scheme
    pub best_cost: String,
    pub solution: Vec<usize>,
    pub iterations: u64,
    pub restarts: u64,
    pub runtime_seconds: f64,
    pub time_to_best_seconds: Option<f64>,
}

impl RunReport {
    /// Format the report as a human readable block.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Instance: {}
- Best Cost: {}
- Iterations: {}
- Restarts: {}
- Runtime: {}
- Time To Best: {}",
            self.instance,
            self.best_cost,
            self.iterations,
            self.restarts,
            format_duration(Duration::from_secs_f64(self.runtime_seconds)),
            self.time_to_best_seconds
                .map(|s| format_duration(Duration::from_secs_f64(s)))
                .unwrap_or_else(|| "-".to_string())
        )
    }
}

/// Save a report to a JSON file.
pub fn save_report<P: AsRef<Path>>(report: &RunReport, path: P) -> std::io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
