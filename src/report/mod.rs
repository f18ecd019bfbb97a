/*!
 * Report Module
 * Text, CSV, and JSON renderings of workloads and runs
 */

pub mod csv;
pub mod gantt;
pub mod json;
pub mod table;

pub use csv::ResultsCsv;
pub use gantt::{render_gantt, GanttChart};
pub use json::SimulationReport;
pub use table::{
    render_comparison, render_outcomes, render_process_table, render_run, ComparisonTable,
    OutcomeTable, ProcessTable, RunReport,
};
