/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input and configuration errors, reported before any policy runs
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Process set is empty")]
    #[diagnostic(
        code(config::empty_process_set),
        help("Supply at least one process; averages are undefined over an empty set.")
    )]
    EmptyProcessSet,

    #[error("Invalid pid 0")]
    #[diagnostic(
        code(config::invalid_pid),
        help("Process ids must be positive integers.")
    )]
    InvalidPid,

    #[error("Duplicate pid {0}")]
    #[diagnostic(
        code(config::duplicate_pid),
        help("Every process in a workload needs a unique pid.")
    )]
    DuplicatePid(Pid),

    #[error("Process {pid} has non-positive burst time {burst}")]
    #[diagnostic(
        code(config::invalid_burst),
        help("Burst time must be at least one tick.")
    )]
    InvalidBurst { pid: Pid, burst: Ticks },

    #[error("Invalid quantum {quantum}: must be between 1 and {max}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("Pass a Round Robin quantum of at least one tick.")
    )]
    InvalidQuantum { quantum: Ticks, max: Ticks },

    #[error("Invalid workload parameters: {0}")]
    #[diagnostic(
        code(config::invalid_workload),
        help("Check the generator bounds (burst and priority ranges must be non-empty).")
    )]
    InvalidWorkload(String),

    #[error("Unknown scheduling policy '{0}'")]
    #[diagnostic(
        code(config::unknown_policy),
        help("Valid: fcfs, sjf, srtf, priority, preemptive_priority, round_robin")
    )]
    UnknownPolicy(String),
}

/// Capacity errors, reported when input exceeds the configured bounds
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CapacityError {
    #[error("Process limit exceeded: {count} processes, limit {limit}")]
    #[diagnostic(
        code(capacity::too_many_processes),
        help("Reduce the workload or raise max_processes in the simulation limits.")
    )]
    TooManyProcesses { count: usize, limit: usize },

    #[error("Timeline too long: horizon {horizon} ticks, limit {limit}")]
    #[diagnostic(
        code(capacity::timeline_too_long),
        help("Shorten bursts/arrivals or raise max_timeline_ticks in the simulation limits.")
    )]
    TimelineTooLong { horizon: Ticks, limit: Ticks },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Capacity error: {0}")]
    #[diagnostic(transparent)]
    Capacity(#[from] CapacityError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Check that the output path is writable and the input file exists.")
    )]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(
        code(sim::json_error),
        help("Workload files are JSON arrays of {{pid, arrival_time, burst_time, priority}}.")
    )]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Whether this error was raised by input validation
    pub fn is_config(&self) -> bool {
        matches!(self, SimError::Config(_))
    }

    /// Whether this error was raised by a capacity bound
    pub fn is_capacity(&self) -> bool {
        matches!(self, SimError::Capacity(_))
    }
}
