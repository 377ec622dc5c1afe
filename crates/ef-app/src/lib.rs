//! Shared application service layer for epiflow.
//!
//! This crate is the interface the CLI (and any rendering frontend) calls: it runs
//! simulations, scales them to percentage series, loads scenario files and exports results.

pub mod error;
pub mod export;
pub mod scenario;
pub mod solve_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export::{ExportFormat, render, to_csv, to_json};
pub use scenario::{InitialConditionDef, Scenario, ScenarioOptions, load_scenario, save_scenario};
pub use solve_service::{
    SolveOutput, SolveResponse, Y_MAX_PERCENT, run_scenario, solve, solve_batch, solve_with,
};
