//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered during a simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid inputs: {0}")]
    Validation(#[from] ef_model::ValidationError),

    #[error("Non-physical condition on day {day}: {what}")]
    NonPhysical { what: &'static str, day: usize },
}

pub type SimResult<T> = Result<T, SimError>;
