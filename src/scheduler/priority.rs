/*!
 * Priority Scheduling
 * Larger priority values run first; pid breaks ties
 */

use super::selection::{run_preemptive, run_to_completion};
use super::timeline::Timeline;
use crate::process::ProcessDescriptor;
use std::cmp::Reverse;

/// Non-preemptive priority: the chosen process keeps the CPU until it finishes
pub fn priority(processes: &mut [ProcessDescriptor]) -> Timeline {
    run_to_completion(processes, |p| Reverse(p.priority))
}

/// Preemptive priority: re-evaluated every tick, so a more urgent arrival takes over immediately
pub fn preemptive_priority(processes: &mut [ProcessDescriptor]) -> Timeline {
    run_preemptive(processes, |p| Reverse(p.priority))
}
