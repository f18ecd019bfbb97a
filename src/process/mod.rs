/*!
 * Process Module
 * Process descriptors, validation, and workload sources
 */

pub mod types;
pub mod validation;
pub mod workload;

pub use types::{reset_simulation_state, ProcessDescriptor, ProcessSpec};
pub use validation::{check_horizon, horizon, validate_processes};
