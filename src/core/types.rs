/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (positive, unique within a workload)
pub type Pid = u32;

/// Simulated time, in integer clock ticks
pub type Ticks = u64;

/// Priority level
///
/// Higher numeric values are more urgent. Both priority policies and the
/// workload generator follow this convention; nothing else in the crate
/// interprets priorities.
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
