//! Error types for bb84-sim.

use thiserror::Error;

/// Errors raised before or after a simulation, never during a single trial.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A simulation parameter is out of its valid range.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Every run was excluded, so there is nothing to summarize.
    #[error("No valid samples: all {requested_runs} runs were excluded")]
    EmptySampleCollection { requested_runs: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
