/*!
 * Workload Validation
 * Boundary checks run once, before any policy is dispatched
 */

use super::types::ProcessDescriptor;
use crate::config::SimLimits;
use crate::core::errors::{CapacityError, ConfigError};
use crate::core::types::{SimResult, Ticks};
use std::collections::HashSet;

/// Validate a process set against input rules and the process-count bound
pub fn validate_processes(processes: &[ProcessDescriptor], limits: &SimLimits) -> SimResult<()> {
    validate_inputs(processes)?;
    check_process_count(processes.len(), limits)?;
    Ok(())
}

/// Input rules: non-empty, positive unique pids, positive bursts
pub(crate) fn validate_inputs(processes: &[ProcessDescriptor]) -> Result<(), ConfigError> {
    if processes.is_empty() {
        return Err(ConfigError::EmptyProcessSet);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.pid == 0 {
            return Err(ConfigError::InvalidPid);
        }
        if !seen.insert(process.pid) {
            return Err(ConfigError::DuplicatePid(process.pid));
        }
        if process.burst_time == 0 {
            return Err(ConfigError::InvalidBurst {
                pid: process.pid,
                burst: process.burst_time,
            });
        }
    }

    Ok(())
}

pub(crate) fn check_process_count(count: usize, limits: &SimLimits) -> Result<(), CapacityError> {
    if count > limits.max_processes {
        return Err(CapacityError::TooManyProcesses {
            count,
            limit: limits.max_processes,
        });
    }
    Ok(())
}

/// Upper bound on the last completion time of any policy: latest arrival plus total burst
pub fn horizon(processes: &[ProcessDescriptor]) -> Ticks {
    let last_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .fold(last_arrival, |acc, p| acc.saturating_add(p.burst_time))
}

/// Reject a run whose timeline could exceed the configured bound
pub fn check_horizon(processes: &[ProcessDescriptor], limits: &SimLimits) -> Result<(), CapacityError> {
    let horizon = horizon(processes);
    if horizon > limits.max_timeline_ticks {
        return Err(CapacityError::TimelineTooLong {
            horizon,
            limit: limits.max_timeline_ticks,
        });
    }
    Ok(())
}
