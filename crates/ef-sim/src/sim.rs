//! Simulation runner and trajectory recording.

use ef_core::Compartment;
use ef_model::validate::{validate_initial_susceptible, validate_inputs};
use ef_model::{CompartmentState, ModelInputs, RateConstants, TransitionModel};
use tracing::{debug, warn};

use crate::diagnostics::ClampReport;
use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, RK4};

/// Fixed time step of the runner: one day.
pub const STEP_DAYS: f64 = 1.0;

/// What to do when vaccination exceeds the initial susceptible share (S0 - p < 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialConditionPolicy {
    /// Clamp the initial susceptible proportion to 0 before the first step.
    #[default]
    Clamp,
    /// Fail validation.
    Reject,
}

/// Options for simulation runs.
#[derive(Clone, Debug, Default)]
pub struct SimOptions {
    pub initial_condition: InitialConditionPolicy,
}

/// Daily compartment proportions for days 0..=n.
///
/// Only `run_sim` builds one, so `states` always holds at least the initial state.
#[derive(Clone, Debug)]
pub struct Trajectory {
    states: Vec<CompartmentState>,
    pub rates: RateConstants,
    pub vaccination_rate: f64,
    pub clamp: ClampReport,
}

impl Trajectory {
    /// Number of simulated days (one less than the number of states).
    pub fn days(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// States indexed by day.
    pub fn states(&self) -> &[CompartmentState] {
        &self.states
    }

    pub fn state(&self, day: usize) -> Option<&CompartmentState> {
        self.states.get(day)
    }

    pub fn final_state(&self) -> &CompartmentState {
        &self.states[self.days()]
    }

    /// Values of one compartment, indexed by day.
    pub fn series(&self, c: Compartment) -> Vec<f64> {
        self.states.iter().map(|x| x.get(c)).collect()
    }

    /// Day and value of the maximum of one compartment (earliest day on ties).
    pub fn peak(&self, c: Compartment) -> (usize, f64) {
        self.states
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (day, x)| {
                let v = x.get(c);
                if v > best.1 { (day, v) } else { best }
            })
    }

    /// The transition model the trajectory was integrated with.
    pub fn model(&self) -> TransitionModel {
        TransitionModel::new(self.rates, self.vaccination_rate)
    }
}

/// Initial proportions before clamping: vaccinated individuals start in R.
pub fn initial_state(inputs: &ModelInputs) -> CompartmentState {
    let s0 = inputs.initial_susceptible;
    let p = inputs.vaccination_rate;
    CompartmentState::new(s0 - p, 1.0 - s0, 0.0, p)
}

/// Run a SEIRS simulation for `inputs.days` days using fixed-step RK4.
///
/// Each step's output is clamped componentwise into [0, 1]; clamping is counted in the
/// returned `ClampReport`.
pub fn run_sim(inputs: &ModelInputs, opts: &SimOptions) -> SimResult<Trajectory> {
    validate_inputs(inputs)?;
    if opts.initial_condition == InitialConditionPolicy::Reject {
        validate_initial_susceptible(inputs)?;
    }

    let rates = RateConstants::from_validated(inputs);
    let model = TransitionModel::new(rates, inputs.vaccination_rate);
    debug!(?rates, days = inputs.days, "starting SEIRS run");

    let mut clamp = ClampReport::default();
    let (mut x, excursions) = initial_state(inputs).clamped();
    clamp.record(0, &excursions);

    let mut states = Vec::with_capacity(inputs.days + 1);
    states.push(x);

    let integrator = RK4;
    for ix in 0..inputs.days {
        let raw = integrator.step(&model, ix as f64 * STEP_DAYS, &x, STEP_DAYS)?;
        if !raw.is_finite() {
            return Err(SimError::NonPhysical {
                what: "integration produced a non-finite state",
                day: ix + 1,
            });
        }
        let (next, excursions) = raw.clamped();
        clamp.record(ix + 1, &excursions);
        states.push(next);
        x = next;
    }

    if clamp.initial_clamped {
        warn!(
            initial_susceptible = inputs.initial_susceptible,
            vaccination_rate = inputs.vaccination_rate,
            "initial susceptible proportion was negative and clamped to 0"
        );
    }
    if clamp.steps_clamped > 0 {
        warn!(
            steps = clamp.steps_clamped,
            first_day = ?clamp.first_clamped_day,
            max_excursion = clamp.max_excursion,
            "integration output left [0, 1] and was clamped"
        );
    }

    Ok(Trajectory {
        states,
        rates,
        vaccination_rate: inputs.vaccination_rate,
        clamp,
    })
}
