/*!
 * First-Come-First-Served
 */

use super::selection::run_to_completion;
use super::timeline::Timeline;
use crate::process::ProcessDescriptor;

/// Run every process to completion in arrival order (pid breaks ties)
pub fn fcfs(processes: &mut [ProcessDescriptor]) -> Timeline {
    run_to_completion(processes, |p| p.arrival_time)
}
