//! Maze solver application: configuration, the solve pipeline, and output
//! artifacts.
//!
//! [`run`] loads a maze file, searches it with A*, paints the route onto the
//! grid and writes two artifacts: the solved grid and a JSON path listing.

pub mod config;
pub mod emit;
pub mod error;
pub mod run;

pub use config::{GenArgs, PathOrder, SolverArgs, SolverConfig};
pub use error::{EmitError, SolveError};
pub use run::{RunReport, run, run_or_report};
