/*!
 * Run Metrics
 * Aggregate waiting/turnaround averages derived from per-process outputs
 */

use crate::core::errors::ConfigError;
use crate::process::ProcessDescriptor;
use serde::{Deserialize, Serialize};

/// Average waiting and turnaround time over one policy run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl Metrics {
    /// Compute averages; an empty set has no defined average
    pub fn from_processes(processes: &[ProcessDescriptor]) -> Result<Self, ConfigError> {
        if processes.is_empty() {
            return Err(ConfigError::EmptyProcessSet);
        }

        let count = processes.len() as f64;
        let total_waiting: u64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: u64 = processes.iter().map(|p| p.turnaround_time).sum();

        Ok(Self {
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
        })
    }
}
