/*!
 * CSV Results Export
 * Append-only `Algorithm,Average Waiting Time,Average Turnaround Time` file
 */

use crate::core::types::SimResult;
use crate::simulation::PolicyRun;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header row written when the file is created
pub const CSV_HEADER: &str = "Algorithm,Average Waiting Time,Average Turnaround Time";

/// Results file receiving one line per policy run
#[derive(Debug, Clone)]
pub struct ResultsCsv {
    path: PathBuf,
}

impl ResultsCsv {
    /// Create (or truncate) the file and write the header
    pub fn create(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::create(&path)?;
        writeln!(file, "{CSV_HEADER}")?;
        debug!(path = %path.display(), "Created results file");
        Ok(Self { path })
    }

    /// Use an existing results file without rewriting its header
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append the averages of one run
    pub fn append(&self, run: &PolicyRun) -> SimResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_row(run))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<name>,<avg waiting>,<avg turnaround>` with two decimals
pub fn format_row(run: &PolicyRun) -> String {
    format!(
        "{},{:.2},{:.2}",
        run.policy.display_name(),
        run.metrics.avg_waiting,
        run.metrics.avg_turnaround
    )
}
