/*!
 * Simulation Driver
 * Owns the process set and runs policies one after another
 */

use super::run::PolicyRun;
use crate::config::SimConfig;
use crate::core::types::SimResult;
use crate::monitoring::{Metrics, RunSpan};
use crate::process::validation::{check_horizon, validate_processes};
use crate::process::{reset_simulation_state, ProcessDescriptor};
use crate::scheduler::{Scheduler, SchedulingPolicy};
use tracing::{info, warn};

/// Sequential, single-threaded simulator
///
/// Lifecycle per policy: reset -> run -> read metrics. Input is validated once,
/// in [`Simulator::new`]; a run that fails its capacity check leaves the
/// process set untouched for the next one.
#[derive(Debug, Clone)]
pub struct Simulator {
    processes: Vec<ProcessDescriptor>,
    config: SimConfig,
}

impl Simulator {
    /// Validate the workload and take ownership of it
    pub fn new(processes: Vec<ProcessDescriptor>, config: SimConfig) -> SimResult<Self> {
        if let Err(e) = validate_processes(&processes, &config.limits) {
            warn!(error = %e, "Rejected workload");
            return Err(e);
        }

        let mut simulator = Self { processes, config };
        simulator.reset_simulation_state();

        info!(
            processes = simulator.processes.len(),
            quantum = simulator.config.quantum.ticks(),
            "Simulator initialized"
        );
        Ok(simulator)
    }

    /// Run one policy from a fresh state
    pub fn run(&mut self, policy: SchedulingPolicy) -> SimResult<PolicyRun> {
        let run_span = RunSpan::new(policy, self.processes.len());
        let _entered = run_span.enter();

        self.reset_simulation_state();
        if let Err(e) = check_horizon(&self.processes, &self.config.limits) {
            warn!(error = %e, "Run aborted");
            return Err(e.into());
        }

        let scheduler = Scheduler::with_quantum(policy, self.config.quantum);
        let timeline = scheduler.run(&mut self.processes);
        let metrics = Metrics::from_processes(&self.processes)?;

        info!(
            avg_waiting = metrics.avg_waiting,
            avg_turnaround = metrics.avg_turnaround,
            "Metrics computed"
        );

        Ok(PolicyRun::new(policy, &self.processes, timeline, metrics))
    }

    /// Run all six policies in canonical order
    pub fn run_all(&mut self) -> SimResult<Vec<PolicyRun>> {
        SchedulingPolicy::ALL
            .iter()
            .map(|&policy| self.run(policy))
            .collect()
    }

    /// Clear simulation state on every process
    pub fn reset_simulation_state(&mut self) {
        reset_simulation_state(&mut self.processes);
    }

    /// Process set, including the simulation state of the last run
    pub fn processes(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
