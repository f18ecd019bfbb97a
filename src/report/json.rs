/*!
 * JSON Report
 */

use crate::core::types::{SimResult, Ticks};
use crate::process::{ProcessDescriptor, ProcessSpec};
use crate::simulation::PolicyRun;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Workload plus every run, as one serializable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub quantum: Ticks,
    pub processes: Vec<ProcessSpec>,
    pub runs: Vec<PolicyRun>,
}

impl SimulationReport {
    pub fn new(quantum: Ticks, processes: &[ProcessDescriptor], runs: Vec<PolicyRun>) -> Self {
        Self {
            quantum,
            processes: processes.iter().map(ProcessDescriptor::spec).collect(),
            runs,
        }
    }

    /// Write as pretty-printed JSON
    pub fn write_to<W: Write>(&self, mut writer: W) -> SimResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
