//! Validation harness for the path solvers: seeded instance generation, an
//! exhaustive oracle for small instances, and the solver sweep.

pub mod generate;
pub mod oracle;
pub mod planner;
pub mod sweep;

pub use generate::{GeneratorConfig, InstanceGenerator};
pub use oracle::brute_force_optimum;
pub use planner::{plan, solver_for};
pub use sweep::{run_sweep, SweepConfig, SweepRecord};
