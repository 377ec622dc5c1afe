//! Continuous-time SEIRS transition equations.
//!
//! Births enter at rate mu, split between S (unvaccinated, 1 - p) and R (vaccinated, p).
//! Every compartment loses mu to natural death; I additionally loses alpha to the disease.

use crate::rates::RateConstants;
use crate::state::{CompartmentState, Derivatives};

/// Flows between compartments at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flows {
    /// S -> E
    pub force_of_infection: f64,
    /// E -> I
    pub progression: f64,
    /// I -> R
    pub recovery: f64,
    /// R -> S
    pub waning: f64,
}

/// Right-hand side of the SEIRS system for a fixed set of rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionModel {
    pub rates: RateConstants,
    /// Fraction of births vaccinated.
    pub vaccination_rate: f64,
}

impl TransitionModel {
    pub fn new(rates: RateConstants, vaccination_rate: f64) -> Self {
        Self {
            rates,
            vaccination_rate,
        }
    }

    pub fn flows(&self, x: &CompartmentState) -> Flows {
        let k = &self.rates;
        Flows {
            force_of_infection: k.beta * x.s * x.i,
            progression: k.sigma * x.e,
            recovery: k.gamma * x.i,
            waning: k.omega * x.r,
        }
    }

    pub fn derivatives(&self, x: &CompartmentState) -> Derivatives {
        let k = &self.rates;
        let p = self.vaccination_rate;
        let f = self.flows(x);

        Derivatives {
            ds: -f.force_of_infection + f.waning - k.mu * x.s + k.mu * (1.0 - p),
            de: f.force_of_infection - f.progression - k.mu * x.e,
            di: f.progression - f.recovery - (k.mu + k.alpha) * x.i,
            dr: f.recovery - f.waning - k.mu * x.r + k.mu * p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ModelInputs;
    use crate::rates::derive;
    use ef_core::{Tolerances, nearly_equal};

    fn unit_rates() -> RateConstants {
        RateConstants {
            alpha: 0.0,
            gamma: 0.5,
            omega: 0.25,
            mu: 0.0,
            sigma: 1.0,
            beta: 2.0,
        }
    }

    #[test]
    fn flows_match_hand_computation() {
        let m = TransitionModel::new(unit_rates(), 0.0);
        let x = CompartmentState::new(0.5, 0.25, 0.125, 0.125);
        let f = m.flows(&x);
        assert_eq!(f.force_of_infection, 0.125);
        assert_eq!(f.progression, 0.25);
        assert_eq!(f.recovery, 0.0625);
        assert_eq!(f.waning, 0.03125);

        let d = m.derivatives(&x);
        assert_eq!(d.ds, -0.125 + 0.03125);
        assert_eq!(d.de, 0.125 - 0.25);
        assert_eq!(d.di, 0.25 - 0.0625);
        assert_eq!(d.dr, 0.0625 - 0.03125);
    }

    #[test]
    fn flows_cancel_without_vital_dynamics() {
        let m = TransitionModel::new(unit_rates(), 0.0);
        let x = CompartmentState::new(0.4, 0.3, 0.2, 0.1);
        let d = m.derivatives(&x);
        assert!(nearly_equal(d.ds + d.de + d.di + d.dr, 0.0, Tolerances::default()));
    }

    #[test]
    fn births_split_by_vaccination() {
        let rates = RateConstants {
            mu: 0.1,
            ..unit_rates()
        };
        let empty = CompartmentState::default();
        let d = TransitionModel::new(rates, 0.25).derivatives(&empty);
        assert!(nearly_equal(d.ds, 0.075, Tolerances::default()));
        assert!(nearly_equal(d.dr, 0.025, Tolerances::default()));
        assert_eq!(d.de, 0.0);
        assert_eq!(d.di, 0.0);
    }

    #[test]
    fn total_derivative_balances_births_and_deaths() {
        let inputs = ModelInputs::new(0.99, 3.0, 7.0, 14.0, 10);
        let rates = derive(&inputs).unwrap();
        let m = TransitionModel::new(rates, inputs.vaccination_rate);
        let x = CompartmentState::new(0.3, 0.1, 0.05, 0.5);
        let d = m.derivatives(&x);
        let expected = rates.mu * (1.0 - x.total()) - rates.alpha * x.i;
        let tol = Tolerances {
            abs: 1e-15,
            rel: 1e-9,
        };
        assert!(nearly_equal(d.ds + d.de + d.di + d.dr, expected, tol));
    }

    #[test]
    fn no_infection_without_infectious_or_exposed() {
        let inputs = ModelInputs::new(1.0, 5.0, 7.0, 14.0, 10).with_vaccination_rate(0.0);
        let m = TransitionModel::new(derive(&inputs).unwrap(), 0.0);
        let d = m.derivatives(&CompartmentState::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(d.de, 0.0);
        assert_eq!(d.di, 0.0);
    }
}
