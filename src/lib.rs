/*!
 * CPU Scheduling Simulator Library
 * Deterministic simulation of classic CPU scheduling policies
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use config::{SimConfig, SimLimits, WorkloadConfig};
pub use crate::core::errors::{CapacityError, ConfigError, SimError};
pub use crate::core::types::{Pid, Priority, SimResult, Ticks};
pub use monitoring::{init_tracing, Metrics};
pub use process::{ProcessDescriptor, ProcessSpec};
pub use scheduler::{Quantum, Scheduler, SchedulingPolicy, Slice, Timeline};
pub use simulation::{PolicyRun, ProcessOutcome, Simulator};
