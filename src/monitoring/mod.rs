/*!
 * Monitoring Module
 * Run metrics and structured tracing
 */

pub mod metrics;
pub mod tracer;

pub use metrics::Metrics;
pub use tracer::{init_tracing, RunSpan};
