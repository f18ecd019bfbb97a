/*!
 * Shared Dispatch Loops
 * Ready-set selection and the two clock models used by rank-based policies
 */

use super::timeline::Timeline;
use crate::core::types::Ticks;
use crate::process::ProcessDescriptor;
use tracing::{debug, trace};

/// Index of the best-ranked ready process at `now`
///
/// Lowest `(rank, pid)` wins, so ties always go to the smallest pid
/// regardless of slice order.
pub(super) fn select_ready<K, F>(processes: &[ProcessDescriptor], now: Ticks, rank: &F) -> Option<usize>
where
    K: Ord,
    F: Fn(&ProcessDescriptor) -> K,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready_at(now))
        .min_by(|(_, a), (_, b)| rank(a).cmp(&rank(b)).then_with(|| a.pid.cmp(&b.pid)))
        .map(|(idx, _)| idx)
}

/// Earliest arrival strictly after `now` among unfinished processes
pub(super) fn next_arrival(processes: &[ProcessDescriptor], now: Ticks) -> Option<Ticks> {
    processes
        .iter()
        .filter(|p| !p.completed && p.arrival_time > now)
        .map(|p| p.arrival_time)
        .min()
}

/// Non-preemptive clock: each selection runs its whole burst in one jump
pub(super) fn run_to_completion<K, F>(processes: &mut [ProcessDescriptor], rank: F) -> Timeline
where
    K: Ord,
    F: Fn(&ProcessDescriptor) -> K,
{
    let mut timeline = Timeline::with_capacity(processes.len());
    let mut pending = processes.iter().filter(|p| !p.completed).count();
    let mut now: Ticks = 0;

    while pending > 0 {
        let Some(idx) = select_ready(processes, now, &rank) else {
            let Some(next) = next_arrival(processes, now) else {
                debug_assert!(false, "{pending} processes pending with no future arrival");
                break;
            };
            trace!(from = now, to = next, "CPU idle until next arrival");
            now = next;
            continue;
        };

        let process = &mut processes[idx];
        trace!(pid = process.pid, now, "Dispatch");
        let start = now;
        let burst = process.remaining_time;
        process.run_for(burst);
        now += burst;

        timeline.record(process.pid, start, now);
        process.complete_at(now);
        pending -= 1;

        debug!(
            pid = process.pid,
            start,
            completion = now,
            waiting = process.waiting_time,
            "Process completed"
        );
    }

    timeline
}

/// Preemptive clock: the best-ranked ready process runs until the next arrival or its completion
///
/// Equivalent to re-selecting on every tick as long as running never worsens
/// the running process's rank, which holds for static ranks and for remaining
/// time. The ready set only changes at arrivals and completions, so a run
/// costs one selection per event instead of one per tick.
pub(super) fn run_preemptive<K, F>(processes: &mut [ProcessDescriptor], rank: F) -> Timeline
where
    K: Ord,
    F: Fn(&ProcessDescriptor) -> K,
{
    let mut timeline = Timeline::with_capacity(processes.len());
    let mut pending = processes.iter().filter(|p| !p.completed).count();
    let mut now: Ticks = 0;
    let mut running: Option<usize> = None;

    while pending > 0 {
        let Some(idx) = select_ready(processes, now, &rank) else {
            let Some(next) = next_arrival(processes, now) else {
                debug_assert!(false, "{pending} processes pending with no future arrival");
                break;
            };
            trace!(from = now, to = next, "CPU idle until next arrival");
            now = next;
            running = None;
            continue;
        };

        let until = next_arrival(processes, now).map_or(Ticks::MAX, |next| next - now);
        let process = &mut processes[idx];
        if running != Some(idx) {
            trace!(pid = process.pid, now, "Dispatch");
            running = Some(idx);
        }

        let step = process.remaining_time.min(until);
        process.run_for(step);
        timeline.record(process.pid, now, now + step);
        now += step;

        if process.remaining_time == 0 {
            process.complete_at(now);
            pending -= 1;
            debug!(
                pid = process.pid,
                completion = now,
                waiting = process.waiting_time,
                "Process completed"
            );
        }
    }

    timeline
}
