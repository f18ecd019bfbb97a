/*!
 * Scheduler Tests
 * Golden timelines and metrics for every policy on the reference workload
 */

use cpu_sched_sim::{ProcessDescriptor, Quantum, Scheduler, SchedulingPolicy, SimConfig, Simulator};
use pretty_assertions::assert_eq;

/// P1(arr=0, burst=5, prio=2), P2(arr=1, burst=3, prio=1), P3(arr=2, burst=8, prio=3)
fn reference_workload() -> Vec<ProcessDescriptor> {
    vec![
        ProcessDescriptor::new(1, 0, 5, 2),
        ProcessDescriptor::new(2, 1, 3, 1),
        ProcessDescriptor::new(3, 2, 8, 3),
    ]
}

fn shape(policy: SchedulingPolicy) -> Vec<(u32, u64, u64)> {
    let mut processes = reference_workload();
    Scheduler::new(policy)
        .run(&mut processes)
        .iter()
        .map(|s| (s.pid, s.start, s.end))
        .collect()
}

fn round2(x: f64) -> String {
    format!("{:.2}", x)
}

#[test]
fn test_fcfs_reference() {
    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let run = sim.run(SchedulingPolicy::Fcfs).unwrap();

    assert_eq!(run.completion_order(), vec![1, 2, 3]);
    let waiting: Vec<_> = run.outcomes.iter().map(|o| o.waiting_time).collect();
    let turnaround: Vec<_> = run.outcomes.iter().map(|o| o.turnaround_time).collect();
    assert_eq!(waiting, vec![0, 4, 6]);
    assert_eq!(turnaround, vec![5, 7, 14]);
    assert_eq!(round2(run.metrics.avg_waiting), "3.33");
    assert_eq!(round2(run.metrics.avg_turnaround), "8.67");
}

#[test]
fn test_sjf_reference() {
    assert_eq!(
        shape(SchedulingPolicy::Sjf),
        vec![(1, 0, 5), (2, 5, 8), (3, 8, 16)]
    );
}

#[test]
fn test_srtf_reference() {
    assert_eq!(
        shape(SchedulingPolicy::Srtf),
        vec![(1, 0, 1), (2, 1, 4), (1, 4, 8), (3, 8, 16)]
    );

    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let run = sim.run(SchedulingPolicy::Srtf).unwrap();
    assert_eq!(round2(run.metrics.avg_waiting), "3.00");
    assert_eq!(round2(run.metrics.avg_turnaround), "8.33");
}

#[test]
fn test_priority_reference() {
    assert_eq!(
        shape(SchedulingPolicy::Priority),
        vec![(1, 0, 5), (3, 5, 13), (2, 13, 16)]
    );
    assert_eq!(
        shape(SchedulingPolicy::PreemptivePriority),
        vec![(1, 0, 2), (3, 2, 10), (1, 10, 13), (2, 13, 16)]
    );
}

#[test]
fn test_round_robin_golden_fixture() {
    assert_eq!(
        shape(SchedulingPolicy::RoundRobin),
        vec![(1, 0, 4), (2, 4, 7), (3, 7, 11), (1, 11, 12), (3, 12, 16)]
    );

    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let run = sim.run(SchedulingPolicy::RoundRobin).unwrap();

    let completion: Vec<_> = run.outcomes.iter().map(|o| o.completion_time).collect();
    assert_eq!(completion, vec![12, 7, 16]);
    assert_eq!(run.context_switches, 4);
    assert_eq!(round2(run.metrics.avg_waiting), "5.33");
    assert_eq!(round2(run.metrics.avg_turnaround), "10.67");
}

#[test]
fn test_round_robin_quantum_one() {
    let mut sim = Simulator::new(
        reference_workload(),
        SimConfig::default().with_quantum(Quantum::new(1).unwrap()),
    )
    .unwrap();
    let run = sim.run(SchedulingPolicy::RoundRobin).unwrap();

    let order: Vec<_> = run.timeline.iter().take(6).map(|s| s.pid).collect();
    // t=1: P2 arrives and queues ahead of P1; t=2: P3 queues ahead of P2
    assert_eq!(order, vec![1, 2, 1, 3, 2, 1]);
    assert_eq!(run.makespan(), 16);
}

#[test]
fn test_late_start_workload() {
    let processes = vec![
        ProcessDescriptor::new(7, 5, 2, 1),
        ProcessDescriptor::new(3, 5, 2, 1),
    ];

    for policy in SchedulingPolicy::ALL {
        let mut processes = processes.clone();
        let timeline = Scheduler::new(policy).run(&mut processes);
        assert_eq!(timeline.start_time(), Some(5), "{policy}");
        assert_eq!(timeline.slices()[0].pid, 3, "{policy}");
        assert_eq!(timeline.end_time(), Some(9), "{policy}");
    }
}

#[test]
fn test_preemptive_policies_at_default_limits() {
    // 1024 staggered arrivals, horizon just under the default tick limit
    let staggered: Vec<_> = (1..=1024)
        .map(|pid| ProcessDescriptor::new(pid, u64::from(pid) - 1, 975, (pid % 10) as i32))
        .collect();
    let mut sim = Simulator::new(staggered, SimConfig::default()).unwrap();

    let run = sim.run(SchedulingPolicy::Srtf).unwrap();
    assert_eq!(run.timeline.len(), 1024);
    assert_eq!(run.makespan(), 1024 * 975);
    assert_eq!(run.completion_order(), (1..=1024).collect::<Vec<u32>>());

    let run = sim.run(SchedulingPolicy::PreemptivePriority).unwrap();
    assert_eq!(run.timeline.busy_ticks(), 1024 * 975);
    assert_eq!(run.makespan(), 1024 * 975);

    let simultaneous: Vec<_> = (1..=1024)
        .map(|pid| ProcessDescriptor::new(pid, 0, 976, (pid % 10) as i32))
        .collect();
    let mut sim = Simulator::new(simultaneous, SimConfig::default()).unwrap();

    for policy in [SchedulingPolicy::Srtf, SchedulingPolicy::PreemptivePriority] {
        let run = sim.run(policy).unwrap();
        assert_eq!(run.timeline.len(), 1024, "{policy}");
        assert_eq!(run.makespan(), 1024 * 976, "{policy}");
    }
}
