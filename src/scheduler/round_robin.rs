/*!
 * Round Robin
 * FIFO ready queue with a fixed quantum
 */

use super::selection::next_arrival;
use super::timeline::Timeline;
use super::types::Quantum;
use crate::core::types::Ticks;
use crate::process::ProcessDescriptor;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Admits arrivals into the ready queue in `(arrival, pid)` order
struct Admission {
    order: Vec<usize>,
    cursor: usize,
}

impl Admission {
    fn new(processes: &[ProcessDescriptor]) -> Self {
        let mut order: Vec<usize> = (0..processes.len())
            .filter(|&i| !processes[i].completed)
            .collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].pid));
        Self { order, cursor: 0 }
    }

    /// Enqueue everything that has arrived by `now`
    fn admit(&mut self, processes: &[ProcessDescriptor], now: Ticks, queue: &mut VecDeque<usize>) {
        while let Some(&idx) = self.order.get(self.cursor) {
            if processes[idx].arrival_time > now {
                break;
            }
            trace!(pid = processes[idx].pid, now, "Process admitted to ready queue");
            queue.push_back(idx);
            self.cursor += 1;
        }
    }
}

/// Round Robin: run the queue head for `min(remaining, quantum)` ticks
///
/// A preempted process goes to the back of the queue after any process that
/// arrived during its slice.
pub fn round_robin(processes: &mut [ProcessDescriptor], quantum: Quantum) -> Timeline {
    let quantum = quantum.ticks();
    let mut timeline = Timeline::with_capacity(processes.len());
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut admission = Admission::new(processes);
    let mut pending = admission.order.len();
    let mut now: Ticks = 0;

    while pending > 0 {
        admission.admit(processes, now, &mut queue);

        let Some(idx) = queue.pop_front() else {
            let Some(next) = next_arrival(processes, now) else {
                debug_assert!(false, "{pending} processes pending with no future arrival");
                break;
            };
            trace!(from = now, to = next, "CPU idle until next arrival");
            now = next;
            continue;
        };

        let process = &mut processes[idx];
        let start = now;
        let slice = process.remaining_time.min(quantum);
        trace!(pid = process.pid, now, slice, "Dispatch");
        process.run_for(slice);
        now += slice;
        timeline.record(process.pid, start, now);

        if process.remaining_time == 0 {
            process.complete_at(now);
            pending -= 1;
            debug!(
                pid = process.pid,
                completion = now,
                waiting = process.waiting_time,
                "Process completed"
            );
        } else {
            admission.admit(processes, now, &mut queue);
            queue.push_back(idx);
        }
    }

    timeline
}
