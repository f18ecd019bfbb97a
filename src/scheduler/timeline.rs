/*!
 * Execution Timeline
 * Ordered, non-overlapping execution slices recorded during one policy run
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a single process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl Slice {
    #[inline(always)]
    pub const fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Gantt-chart timeline
///
/// Adjacent slices of the same process are merged on record, so a
/// tick-by-tick preemptive run produces the same compact shape as a
/// non-preemptive one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Append execution of `pid` over `[start, end)`
    ///
    /// Slices must be recorded in time order and must not overlap.
    pub fn record(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        debug_assert!(end > start, "empty slice [{start}, {end}) for pid {pid}");

        if let Some(last) = self.slices.last_mut() {
            debug_assert!(
                start >= last.end,
                "slice [{start}, {end}) for pid {pid} overlaps [{}, {}) of pid {}",
                last.start,
                last.end,
                last.pid
            );
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }

        self.slices.push(Slice { pid, start, end });
    }

    /// All slices, ordered by start time
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slice> {
        self.slices.iter()
    }

    /// Number of slice boundaries where the running pid changes
    pub fn context_switch_count(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }

    /// Start of the first slice
    pub fn start_time(&self) -> Option<Ticks> {
        self.slices.first().map(|s| s.start)
    }

    /// End of the last slice
    pub fn end_time(&self) -> Option<Ticks> {
        self.slices.last().map(|s| s.end)
    }

    /// Total ticks the CPU spent executing
    pub fn busy_ticks(&self) -> Ticks {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Slices belonging to one process
    pub fn slices_for(&self, pid: Pid) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.pid == pid)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
