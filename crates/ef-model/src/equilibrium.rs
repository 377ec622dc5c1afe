//! Closed-form steady states of the SEIRS system with births and vaccination.

use crate::rates::RateConstants;
use crate::state::CompartmentState;

/// Steady state with no infection present.
///
/// R settles where vaccinated births balance waning and death; S takes the remainder.
pub fn disease_free_equilibrium(rates: &RateConstants, vaccination_rate: f64) -> CompartmentState {
    let p = vaccination_rate;
    let r = rates.mu * p / (rates.omega + rates.mu);
    CompartmentState::new(1.0 - r, 0.0, 0.0, r)
}

/// R0 scaled by the susceptible share at the disease-free equilibrium.
pub fn effective_reproduction_number(rates: &RateConstants, vaccination_rate: f64) -> f64 {
    rates.basic_reproduction_number() * disease_free_equilibrium(rates, vaccination_rate).s
}

/// Endemic steady state, if the disease can persist.
///
/// Returns `None` when the effective reproduction number is at or below one.
pub fn endemic_equilibrium(
    rates: &RateConstants,
    vaccination_rate: f64,
) -> Option<CompartmentState> {
    let k = rates;
    let p = vaccination_rate;
    let s = 1.0 / k.basic_reproduction_number();

    let waning_share = k.omega / (k.omega + k.mu);
    let numerator = k.mu * ((1.0 - p) - s + waning_share * p);
    let denominator = k.beta * s - waning_share * k.gamma;
    if numerator <= 0.0 || denominator <= 0.0 {
        return None;
    }

    let i = numerator / denominator;
    let e = k.infectious_exit_rate() * i / k.sigma;
    let r = (k.gamma * i + k.mu * p) / (k.omega + k.mu);
    Some(CompartmentState::new(s, e, i, r))
}
