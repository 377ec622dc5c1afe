//! Fixed-step time integration of the SEIRS model.
//!
//! Provides:
//! - `TransientModel` trait for pluggable dynamic systems
//! - Fixed-step RK4 integrator
//! - Simulation runner producing a daily `Trajectory`
//! - Clamp diagnostics and trajectory summaries

pub mod diagnostics;
pub mod error;
pub mod integrator;
pub mod model;
pub mod sim;
pub mod summary;

// Re-exports for public API
pub use diagnostics::ClampReport;
pub use error::{SimError, SimResult};
pub use integrator::{Integrator, RK4};
pub use model::TransientModel;
pub use sim::{InitialConditionPolicy, STEP_DAYS, SimOptions, Trajectory, initial_state, run_sim};
pub use summary::{EQUILIBRIUM_TOLERANCE, TrajectorySummary, summarize};
