/*!
 * Simulation Module
 * Driver and per-run result records
 */

pub mod driver;
pub mod run;

pub use driver::Simulator;
pub use run::{PolicyRun, ProcessOutcome};
