/*!
 * Shortest Job First
 * Non-preemptive SJF and its preemptive form, shortest remaining time first
 */

use super::selection::{run_preemptive, run_to_completion};
use super::timeline::Timeline;
use crate::process::ProcessDescriptor;

/// Non-preemptive SJF: dispatch the ready process with the smallest burst
pub fn sjf(processes: &mut [ProcessDescriptor]) -> Timeline {
    run_to_completion(processes, |p| p.burst_time)
}

/// Preemptive SJF: every tick, run the ready process with the least work left
pub fn srtf(processes: &mut [ProcessDescriptor]) -> Timeline {
    run_preemptive(processes, |p| p.remaining_time)
}
