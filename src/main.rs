/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Generates (or loads) a workload, runs every scheduling policy over it,
 * prints per-policy reports, and appends averages to a CSV file.
 */

use clap::Parser;
use cpu_sched_sim::core::limits::{DEFAULT_PROCESS_COUNT, DEFAULT_QUANTUM, DEFAULT_RESULTS_CSV};
use cpu_sched_sim::process::workload;
use cpu_sched_sim::report::{
    render_comparison, render_process_table, render_run, ResultsCsv, SimulationReport,
};
use cpu_sched_sim::{init_tracing, Quantum, SimConfig, Simulator, WorkloadConfig};
use miette::IntoDiagnostic;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Simulate CPU scheduling policies over a synthetic workload
#[derive(Parser, Debug)]
#[command(name = "cpu-sched-sim", version, about, long_about = None)]
struct Args {
    /// Number of processes to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_PROCESS_COUNT)]
    processes: usize,

    /// Round Robin time quantum, in ticks
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM)]
    quantum: u64,

    /// Seed for workload generation (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load the workload from a JSON file instead of generating it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSV file receiving one line of averages per policy
    #[arg(long, default_value = DEFAULT_RESULTS_CSV)]
    csv: PathBuf,

    /// Print a JSON report instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let quantum = Quantum::new(args.quantum)?;
    let config = SimConfig::default().with_quantum(quantum);

    let processes = match &args.input {
        Some(path) => workload::load(path)?,
        None => {
            let seed = args.seed.unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0)
            });
            workload::generate(&WorkloadConfig::new(args.processes, seed))?
        }
    };

    let mut simulator = Simulator::new(processes, config)?;
    let results = ResultsCsv::create(&args.csv)?;

    if !args.json {
        print!("{}", render_process_table(simulator.processes()));
    }

    let runs = simulator.run_all()?;
    for run in &runs {
        results.append(run)?;
        if !args.json {
            print!("{}", render_run(run));
        }
    }

    if args.json {
        let report = SimulationReport::new(quantum.ticks(), simulator.processes(), runs);
        report.write_to(std::io::stdout().lock())?;
    } else {
        println!();
        print!("{}", render_comparison(&runs));
    }

    info!(path = %results.path().display(), "Results written");
    std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
    Ok(())
}
