//! Error types for the ef-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the model and simulation crates
/// and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported scenario format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ef-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ef_model::ValidationError> for AppError {
    fn from(err: ef_model::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ef_sim::SimError> for AppError {
    fn from(err: ef_sim::SimError) -> Self {
        match err {
            ef_sim::SimError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Simulation(other.to_string()),
        }
    }
}
