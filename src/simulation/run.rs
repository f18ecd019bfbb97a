/*!
 * Run Records
 * Immutable results of one policy run
 */

use crate::core::types::{Pid, Ticks};
use crate::monitoring::Metrics;
use crate::process::ProcessDescriptor;
use crate::scheduler::{SchedulingPolicy, Timeline};
use serde::{Deserialize, Serialize};

/// Per-process outputs of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessOutcome {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub completion_time: Ticks,
}

impl From<&ProcessDescriptor> for ProcessOutcome {
    fn from(p: &ProcessDescriptor) -> Self {
        Self {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            waiting_time: p.waiting_time,
            turnaround_time: p.turnaround_time,
            completion_time: p.completion_time,
        }
    }
}

/// Everything a reporter needs from one policy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PolicyRun {
    pub policy: SchedulingPolicy,
    /// Outcomes in pid order
    pub outcomes: Vec<ProcessOutcome>,
    pub timeline: Timeline,
    pub metrics: Metrics,
    pub context_switches: usize,
}

impl PolicyRun {
    pub(crate) fn new(
        policy: SchedulingPolicy,
        processes: &[ProcessDescriptor],
        timeline: Timeline,
        metrics: Metrics,
    ) -> Self {
        let mut outcomes: Vec<ProcessOutcome> = processes.iter().map(ProcessOutcome::from).collect();
        outcomes.sort_by_key(|o| o.pid);

        Self {
            policy,
            outcomes,
            context_switches: timeline.context_switch_count(),
            timeline,
            metrics,
        }
    }

    /// Outcome for one pid
    pub fn outcome(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.outcomes
            .binary_search_by_key(&pid, |o| o.pid)
            .ok()
            .map(|i| &self.outcomes[i])
    }

    /// Pids ordered by completion time (pid breaks ties)
    pub fn completion_order(&self) -> Vec<Pid> {
        let mut order: Vec<&ProcessOutcome> = self.outcomes.iter().collect();
        order.sort_by_key(|o| (o.completion_time, o.pid));
        order.into_iter().map(|o| o.pid).collect()
    }

    /// Time of the last completion
    pub fn makespan(&self) -> Ticks {
        self.outcomes
            .iter()
            .map(|o| o.completion_time)
            .max()
            .unwrap_or(0)
    }
}
