/*!
 * Simulation Tests
 * Driver validation, capacity limits, and result exports
 */

use cpu_sched_sim::process::workload;
use cpu_sched_sim::report::csv::CSV_HEADER;
use cpu_sched_sim::report::{render_gantt, render_run, ResultsCsv, SimulationReport};
use cpu_sched_sim::{
    CapacityError, ConfigError, ProcessDescriptor, SchedulingPolicy, SimConfig, SimError,
    SimLimits, Simulator, WorkloadConfig,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn reference_workload() -> Vec<ProcessDescriptor> {
    vec![
        ProcessDescriptor::new(1, 0, 5, 2),
        ProcessDescriptor::new(2, 1, 3, 1),
        ProcessDescriptor::new(3, 2, 8, 3),
    ]
}

#[test]
fn test_invalid_workloads_rejected() {
    let cases = vec![
        (vec![], ConfigError::EmptyProcessSet),
        (
            vec![ProcessDescriptor::new(0, 0, 1, 1)],
            ConfigError::InvalidPid,
        ),
        (
            vec![
                ProcessDescriptor::new(4, 0, 1, 1),
                ProcessDescriptor::new(4, 2, 3, 1),
            ],
            ConfigError::DuplicatePid(4),
        ),
        (
            vec![ProcessDescriptor::new(9, 0, 0, 1)],
            ConfigError::InvalidBurst { pid: 9, burst: 0 },
        ),
    ];

    for (processes, expected) in cases {
        let err = Simulator::new(processes, SimConfig::default()).unwrap_err();
        assert!(err.is_config());
        assert_eq!(err.to_string(), SimError::from(expected).to_string());
    }
}

#[test]
fn test_strict_limits_reject_large_workload() {
    let processes = workload::generate(&WorkloadConfig::new(11, 1)).unwrap();
    let config = SimConfig::default().with_limits(SimLimits::strict());

    let err = Simulator::new(processes, config).unwrap_err();
    assert!(err.is_capacity());
    assert!(matches!(
        err,
        SimError::Capacity(CapacityError::TooManyProcesses { count: 11, limit: 10 })
    ));
}

#[test]
fn test_horizon_limit_checked_per_run() {
    let processes = vec![ProcessDescriptor::new(1, 95, 10, 1)];
    let config = SimConfig::default().with_limits(SimLimits::strict());

    let mut sim = Simulator::new(processes, config).unwrap();
    let err = sim.run(SchedulingPolicy::RoundRobin).unwrap_err();
    assert!(matches!(
        err,
        SimError::Capacity(CapacityError::TimelineTooLong { horizon: 105, limit: 100 })
    ));
}

#[test]
fn test_run_all_reference_metrics() {
    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let runs = sim.run_all().unwrap();

    let rows: Vec<String> = runs
        .iter()
        .map(|r| {
            format!(
                "{} {:.2} {:.2}",
                r.policy.as_str(),
                r.metrics.avg_waiting,
                r.metrics.avg_turnaround
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            "fcfs 3.33 8.67",
            "sjf 3.33 8.67",
            "srtf 3.00 8.33",
            "priority 5.00 10.33",
            "preemptive_priority 6.67 12.00",
            "round_robin 5.33 10.67",
        ]
    );
}

#[test]
fn test_csv_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let csv = ResultsCsv::create(&path).unwrap();
    for run in sim.run_all().unwrap() {
        csv.append(&run).unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], "FCFS,3.33,8.67");
    assert_eq!(lines[3], "Preemptive SJF,3.00,8.33");
    assert_eq!(lines[6], "Round Robin,5.33,10.67");
}

#[test]
fn test_csv_create_truncates_and_open_appends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "stale\n").unwrap();

    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let run = sim.run(SchedulingPolicy::Fcfs).unwrap();

    ResultsCsv::create(&path).unwrap().append(&run).unwrap();
    ResultsCsv::open(&path).append(&run).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        format!("{CSV_HEADER}\nFCFS,3.33,8.67\nFCFS,3.33,8.67\n")
    );
}

#[test]
fn test_json_report_parses_back() {
    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let runs = sim.run_all().unwrap();
    let report = SimulationReport::new(4, sim.processes(), runs);

    let mut buf = Vec::new();
    report.write_to(&mut buf).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["quantum"], 4);
    assert_eq!(value["processes"].as_array().unwrap().len(), 3);
    assert_eq!(value["runs"][0]["policy"], "fcfs");
    assert_eq!(value["runs"][5]["context_switches"], 4);

    let parsed: SimulationReport = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed.processes, report.processes);
    assert_eq!(parsed.runs[5].timeline, report.runs[5].timeline);
}

#[test]
fn test_load_workload_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"pid": 1, "arrival_time": 0, "burst_time": 5, "priority": 2}},
            {{"pid": 2, "arrival_time": 1, "burst_time": 3, "priority": 1}},
            {{"pid": 3, "arrival_time": 2, "burst_time": 8, "priority": 3}}
        ]"#
    )
    .unwrap();

    let processes = workload::load(file.path()).unwrap();
    assert_eq!(processes, reference_workload());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = workload::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_rendered_run_contains_gantt() {
    let mut sim = Simulator::new(reference_workload(), SimConfig::default()).unwrap();
    let run = sim.run(SchedulingPolicy::Fcfs).unwrap();

    let text = render_run(&run);
    assert!(text.contains(&render_gantt(&run.timeline)));
    assert!(text.contains("Average Waiting Time: 3.33"));
    assert!(text.contains("Context switches: 2"));
}
