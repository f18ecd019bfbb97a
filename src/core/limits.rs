/*!
 * Simulation Limits and Constants
 *
 * Centralized location for defaults and bounds used by the simulator.
 */

use super::types::{Priority, Ticks};

// =============================================================================
// SCHEDULER
// =============================================================================

/// Default Round Robin quantum (4 ticks)
pub const DEFAULT_QUANTUM: Ticks = 4;

/// Largest accepted Round Robin quantum
pub const MAX_QUANTUM: Ticks = 10_000;

// =============================================================================
// CAPACITY
// =============================================================================

/// Default upper bound on the number of processes in one workload
pub const DEFAULT_MAX_PROCESSES: usize = 1_024;

/// Default upper bound on the simulated horizon (max arrival + total burst)
pub const DEFAULT_MAX_TIMELINE_TICKS: Ticks = 1_000_000;

/// Relaxed bounds for large offline experiments
pub const RELAXED_MAX_PROCESSES: usize = 65_536;
pub const RELAXED_MAX_TIMELINE_TICKS: Ticks = 100_000_000;

/// Strict bounds matching the classic classroom setup (10 processes)
pub const STRICT_MAX_PROCESSES: usize = 10;
pub const STRICT_MAX_TIMELINE_TICKS: Ticks = 100;

// =============================================================================
// WORKLOAD GENERATION
// =============================================================================

/// Default number of generated processes
pub const DEFAULT_PROCESS_COUNT: usize = 5;

/// Arrivals are drawn from `0..DEFAULT_MAX_ARRIVAL`
pub const DEFAULT_MAX_ARRIVAL: Ticks = 10;

/// Bursts are drawn from `1..=DEFAULT_MAX_BURST`
pub const DEFAULT_MAX_BURST: Ticks = 10;

/// Priorities are drawn from `DEFAULT_MIN_PRIORITY..=DEFAULT_MAX_PRIORITY`
pub const DEFAULT_MIN_PRIORITY: Priority = 1;
pub const DEFAULT_MAX_PRIORITY: Priority = 10;

// =============================================================================
// REPORTING
// =============================================================================

/// Default CSV file receiving one line per policy run
pub const DEFAULT_RESULTS_CSV: &str = "scheduling_results.csv";
