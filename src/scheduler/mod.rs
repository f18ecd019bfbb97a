/*!
 * CPU Scheduler
 * Simulated scheduling policies over a pre-known process set
 *
 * Every policy mutates the simulation state of the processes it is given
 * (never their pid/arrival/burst/priority) and returns the execution
 * timeline of the run. Policies are total over validated input.
 */

mod fcfs;
mod priority;
mod round_robin;
mod selection;
mod sjf;
pub mod timeline;
pub mod types;

pub use fcfs::fcfs;
pub use priority::{preemptive_priority, priority};
pub use round_robin::round_robin;
pub use sjf::{sjf, srtf};
pub use timeline::{Slice, Timeline};
pub use types::{Quantum, SchedulingPolicy};

use crate::process::ProcessDescriptor;
use tracing::info;

/// Policy dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    policy: SchedulingPolicy,
    quantum: Quantum,
}

impl Scheduler {
    /// Create scheduler with the default quantum
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self::with_quantum(policy, Quantum::default())
    }

    /// Create scheduler with custom quantum (only Round Robin uses it)
    pub fn with_quantum(policy: SchedulingPolicy, quantum: Quantum) -> Self {
        Self { policy, quantum }
    }

    /// Run the policy over `processes`, whose simulation state must be freshly reset
    pub fn run(&self, processes: &mut [ProcessDescriptor]) -> Timeline {
        debug_assert!(
            processes
                .iter()
                .all(|p| !p.completed && p.remaining_time == p.burst_time),
            "scheduler invoked on processes that were not reset"
        );

        let timeline = match self.policy {
            SchedulingPolicy::Fcfs => fcfs(processes),
            SchedulingPolicy::Sjf => sjf(processes),
            SchedulingPolicy::Srtf => srtf(processes),
            SchedulingPolicy::Priority => priority(processes),
            SchedulingPolicy::PreemptivePriority => preemptive_priority(processes),
            SchedulingPolicy::RoundRobin => round_robin(processes, self.quantum),
        };

        debug_assert!(processes.iter().all(|p| p.completed
            && p.remaining_time == 0
            && p.turnaround_time == p.completion_time - p.arrival_time
            && p.turnaround_time == p.waiting_time + p.burst_time));

        info!(
            policy = self.policy.as_str(),
            preemptive = self.policy.is_preemptive(),
            slices = timeline.len(),
            context_switches = timeline.context_switch_count(),
            "Policy run complete"
        );

        timeline
    }
}
