/*!
 * Process Types
 * Process descriptors: static workload inputs plus per-run simulation state
 */

use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Static description of a process, as supplied by a generator or loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// A process under simulation
///
/// `pid`, `arrival_time`, `burst_time` and `priority` are fixed at creation.
/// The remaining fields are simulation state: policies mutate them in place
/// and the driver clears them with [`ProcessDescriptor::reset_simulation_state`]
/// before every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    pub remaining_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub completion_time: Ticks,
    pub completed: bool,
}

impl ProcessDescriptor {
    #[inline]
    #[must_use]
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: 0,
            completed: false,
        }
    }

    /// Static inputs of this process
    #[inline]
    #[must_use]
    pub fn spec(&self) -> ProcessSpec {
        ProcessSpec::new(self.pid, self.arrival_time, self.burst_time, self.priority)
    }

    /// Clear simulation state so the next policy run starts fresh
    pub fn reset_simulation_state(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.completion_time = 0;
        self.completed = false;
    }

    /// Ready at `now`: arrived, not completed, and with work left
    #[inline(always)]
    #[must_use]
    pub fn is_ready_at(&self, now: Ticks) -> bool {
        self.arrival_time <= now && !self.completed && self.remaining_time > 0
    }

    /// Consume `ticks` of CPU time
    #[inline]
    pub(crate) fn run_for(&mut self, ticks: Ticks) {
        debug_assert!(
            ticks <= self.remaining_time,
            "process {} ran {} ticks with only {} remaining",
            self.pid,
            ticks,
            self.remaining_time
        );
        self.remaining_time -= ticks;
    }

    /// Record the completion event at `now` and derive waiting/turnaround
    pub(crate) fn complete_at(&mut self, now: Ticks) {
        debug_assert_eq!(
            self.remaining_time, 0,
            "process {} completed with work remaining",
            self.pid
        );
        debug_assert!(!self.completed, "process {} completed twice", self.pid);
        debug_assert!(now >= self.arrival_time + self.burst_time);

        self.completed = true;
        self.completion_time = now;
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

impl From<ProcessSpec> for ProcessDescriptor {
    fn from(spec: ProcessSpec) -> Self {
        Self::new(spec.pid, spec.arrival_time, spec.burst_time, spec.priority)
    }
}

/// Reset every process in the set
pub fn reset_simulation_state(processes: &mut [ProcessDescriptor]) {
    for process in processes.iter_mut() {
        process.reset_simulation_state();
    }
}
