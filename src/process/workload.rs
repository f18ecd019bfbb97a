/*!
 * Workload Sources
 * Seeded random generation and JSON loading of process sets
 */

use super::types::{ProcessDescriptor, ProcessSpec};
use crate::config::WorkloadConfig;
use crate::core::types::{Pid, SimResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Generate a random workload with pids `1..=count`
pub fn generate(config: &WorkloadConfig) -> SimResult<Vec<ProcessDescriptor>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let processes: Vec<ProcessDescriptor> = (1..=config.count)
        .map(|n| {
            let arrival_time = if config.max_arrival == 0 {
                0
            } else {
                rng.gen_range(0..config.max_arrival)
            };
            let burst_time = rng.gen_range(1..=config.max_burst);
            let priority = rng.gen_range(config.min_priority..=config.max_priority);
            ProcessDescriptor::new(n as Pid, arrival_time, burst_time, priority)
        })
        .collect();

    info!(
        count = processes.len(),
        seed = config.seed,
        "Generated random workload"
    );
    Ok(processes)
}

/// Parse a JSON array of process specs
pub fn from_reader<R: Read>(reader: R) -> SimResult<Vec<ProcessDescriptor>> {
    let specs: Vec<ProcessSpec> = serde_json::from_reader(reader)?;
    debug!(count = specs.len(), "Parsed workload");
    Ok(specs.into_iter().map(ProcessDescriptor::from).collect())
}

/// Load a workload file (JSON array of `{pid, arrival_time, burst_time, priority}`)
pub fn load(path: impl AsRef<Path>) -> SimResult<Vec<ProcessDescriptor>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let processes = from_reader(BufReader::new(file))?;
    info!(path = %path.display(), count = processes.len(), "Loaded workload");
    Ok(processes)
}
