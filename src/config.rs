/*!
 * Simulation Configuration
 *
 * Quantum, capacity bounds, and workload generator parameters.
 */

use crate::core::errors::ConfigError;
use crate::core::limits::*;
use crate::core::types::{Priority, Ticks};
use crate::scheduler::Quantum;
use serde::{Deserialize, Serialize};

/// Capacity bounds for a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimLimits {
    /// Maximum processes per workload (default: 1024)
    pub max_processes: usize,

    /// Maximum simulated horizon in ticks (default: 1,000,000)
    pub max_timeline_ticks: Ticks,
}

impl SimLimits {
    /// Create default limits
    pub fn new() -> Self {
        Self {
            max_processes: DEFAULT_MAX_PROCESSES,
            max_timeline_ticks: DEFAULT_MAX_TIMELINE_TICKS,
        }
    }

    /// Create relaxed limits for large offline experiments
    pub fn relaxed() -> Self {
        Self {
            max_processes: RELAXED_MAX_PROCESSES,
            max_timeline_ticks: RELAXED_MAX_TIMELINE_TICKS,
        }
    }

    /// Create strict limits (10 processes, 100 ticks)
    pub fn strict() -> Self {
        Self {
            max_processes: STRICT_MAX_PROCESSES,
            max_timeline_ticks: STRICT_MAX_TIMELINE_TICKS,
        }
    }
}

impl Default for SimLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    /// Round Robin quantum (default: 4 ticks)
    pub quantum: Quantum,

    /// Capacity bounds
    pub limits: SimLimits,
}

impl SimConfig {
    pub fn new(quantum: Quantum, limits: SimLimits) -> Self {
        Self { quantum, limits }
    }

    #[must_use]
    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SimLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Parameters for the random workload generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkloadConfig {
    /// Number of processes to generate
    pub count: usize,

    /// RNG seed; the same seed always yields the same workload
    pub seed: u64,

    /// Arrivals are drawn from `0..max_arrival` (0 means everything arrives at 0)
    pub max_arrival: Ticks,

    /// Bursts are drawn from `1..=max_burst`
    pub max_burst: Ticks,

    /// Priorities are drawn from `min_priority..=max_priority`
    pub min_priority: Priority,
    pub max_priority: Priority,
}

impl WorkloadConfig {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            max_arrival: DEFAULT_MAX_ARRIVAL,
            max_burst: DEFAULT_MAX_BURST,
            min_priority: DEFAULT_MIN_PRIORITY,
            max_priority: DEFAULT_MAX_PRIORITY,
        }
    }

    /// Check that every sampling range is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyProcessSet);
        }
        if self.max_burst == 0 {
            return Err(ConfigError::InvalidWorkload(
                "max_burst must be at least 1".to_string(),
            ));
        }
        if self.min_priority > self.max_priority {
            return Err(ConfigError::InvalidWorkload(format!(
                "priority range {}..={} is empty",
                self.min_priority, self.max_priority
            )));
        }
        Ok(())
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESS_COUNT, 0)
    }
}
