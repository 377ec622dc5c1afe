//! SEIRS compartment model: inputs, validation, derived rates and the transition equations.
//!
//! Provides:
//! - `ModelInputs`: epidemiological inputs for one simulation request
//! - `RateConstants`: the six per-day ODE rate constants derived from the inputs
//! - `CompartmentState` / `Derivatives`: named (s, e, i, r) records
//! - `TransitionModel`: instantaneous derivatives of the compartment proportions
//! - equilibrium helpers for the disease-free and endemic steady states

pub mod equilibrium;
pub mod inputs;
pub mod rates;
pub mod state;
pub mod transition;
pub mod validate;

pub use equilibrium::{disease_free_equilibrium, effective_reproduction_number, endemic_equilibrium};
pub use inputs::ModelInputs;
pub use rates::{RateConstants, derive};
pub use state::{CompartmentState, Derivatives};
pub use transition::{Flows, TransitionModel};
pub use validate::{ValidationError, ValidationResult, validate_inputs};
