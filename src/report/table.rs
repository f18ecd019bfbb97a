/*!
 * Text Tables
 * Workload listing and per-run result summaries
 */

use super::gantt::GanttChart;
use crate::process::ProcessDescriptor;
use crate::simulation::PolicyRun;
use std::fmt;

/// Workload as a `PID Arrival Burst Priority` table
pub struct ProcessTable<'a>(pub &'a [ProcessDescriptor]);

impl fmt::Display for ProcessTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5} {:>8} {:>6} {:>9}", "PID", "Arrival", "Burst", "Priority")?;
        for p in self.0 {
            writeln!(
                f,
                "{:>5} {:>8} {:>6} {:>9}",
                p.pid, p.arrival_time, p.burst_time, p.priority
            )?;
        }
        Ok(())
    }
}

/// Per-process outcome table for one run
pub struct OutcomeTable<'a>(pub &'a PolicyRun);

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} {:>8} {:>11} {:>11}",
            "PID", "Waiting", "Turnaround", "Completion"
        )?;
        for o in &self.0.outcomes {
            writeln!(
                f,
                "{:>5} {:>8} {:>11} {:>11}",
                o.pid, o.waiting_time, o.turnaround_time, o.completion_time
            )?;
        }
        Ok(())
    }
}

/// Full text report of one run: outcomes, Gantt chart, averages
pub struct RunReport<'a>(pub &'a PolicyRun);

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.0;
        writeln!(f)?;
        writeln!(f, "{} Scheduling:", run.policy.display_name())?;
        write!(f, "{}", OutcomeTable(run))?;
        writeln!(f)?;
        writeln!(f, "Gantt Chart:")?;
        write!(f, "{}", GanttChart(&run.timeline))?;
        writeln!(f, "Context switches: {}", run.context_switches)?;
        writeln!(f, "Average Waiting Time: {:.2}", run.metrics.avg_waiting)?;
        writeln!(f, "Average Turnaround Time: {:.2}", run.metrics.avg_turnaround)
    }
}

/// One line per run, for side-by-side comparison
pub struct ComparisonTable<'a>(pub &'a [PolicyRun]);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<24} {:>12} {:>15} {:>9}",
            "Algorithm", "Avg Waiting", "Avg Turnaround", "Switches"
        )?;
        for run in self.0 {
            writeln!(
                f,
                "{:<24} {:>12.2} {:>15.2} {:>9}",
                run.policy.display_name(),
                run.metrics.avg_waiting,
                run.metrics.avg_turnaround,
                run.context_switches
            )?;
        }
        Ok(())
    }
}

pub fn render_process_table(processes: &[ProcessDescriptor]) -> String {
    ProcessTable(processes).to_string()
}

pub fn render_outcomes(run: &PolicyRun) -> String {
    OutcomeTable(run).to_string()
}

pub fn render_run(run: &PolicyRun) -> String {
    RunReport(run).to_string()
}

pub fn render_comparison(runs: &[PolicyRun]) -> String {
    ComparisonTable(runs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::scheduler::SchedulingPolicy;
    use crate::simulation::Simulator;

    fn fcfs_run() -> PolicyRun {
        let processes = vec![
            ProcessDescriptor::new(1, 0, 5, 2),
            ProcessDescriptor::new(2, 1, 3, 1),
            ProcessDescriptor::new(3, 2, 8, 3),
        ];
        let mut sim = Simulator::new(processes, SimConfig::default()).unwrap();
        sim.run(SchedulingPolicy::Fcfs).unwrap()
    }

    #[test]
    fn test_process_table() {
        let table = render_process_table(&[ProcessDescriptor::new(1, 0, 5, -2)]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "    1        0      5        -2");
    }

    #[test]
    fn test_run_report_contents() {
        let report = render_run(&fcfs_run());
        assert!(report.contains("FCFS Scheduling:"));
        assert!(report.contains("| P1 | P2 | P3 |"));
        assert!(report.contains("Average Waiting Time: 3.33"));
        assert!(report.contains("Average Turnaround Time: 8.67"));
        assert!(report.contains("Context switches: 2"));
    }

    #[test]
    fn test_comparison_row() {
        let table = render_comparison(&[fcfs_run()]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("FCFS"));
        assert!(row.contains("3.33"));
        assert!(row.contains("8.67"));
    }

    #[test]
    fn test_run_report_layout() {
        let report = render_run(&fcfs_run());
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "FCFS Scheduling:");
        assert_eq!(lines[2], "  PID  Waiting  Turnaround  Completion");
        assert_eq!(lines[3], "    1        0           5           5");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Gantt Chart:");
        assert_eq!(lines[8], "| P1 | P2 | P3 |");
        assert_eq!(lines[9], "0    5    8    16");
        assert_eq!(lines[12], "Average Turnaround Time: 8.67");
        assert_eq!(lines.len(), 13);
    }
}
