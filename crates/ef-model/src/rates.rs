//! Per-day rate constants derived from the epidemiological inputs.

use ef_core::units::{days, per_day, years};
use serde::{Deserialize, Serialize};

use crate::inputs::ModelInputs;
use crate::validate::{ValidationResult, validate_inputs};

/// The six ODE rate constants, all per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConstants {
    /// Disease-induced death rate (0 when disease mortality is disabled).
    pub alpha: f64,
    /// Recovery rate.
    pub gamma: f64,
    /// Immunity waning rate.
    pub omega: f64,
    /// Natural death rate, equal to the birth rate.
    pub mu: f64,
    /// Progression rate from exposed to infectious.
    pub sigma: f64,
    /// Transmission rate.
    pub beta: f64,
}

/// Validate `inputs` and derive the rate constants.
pub fn derive(inputs: &ModelInputs) -> ValidationResult<RateConstants> {
    validate_inputs(inputs)?;
    Ok(RateConstants::from_validated(inputs))
}

impl RateConstants {
    /// Derive rates from inputs that already passed validation.
    ///
    /// beta inverts R0 = beta sigma / ((sigma + mu)(gamma + mu + alpha)).
    pub fn from_validated(inputs: &ModelInputs) -> Self {
        let alpha = if inputs.has_disease_mortality() {
            per_day(days(inputs.death_onset_days))
        } else {
            0.0
        };
        let gamma = per_day(days(inputs.infectious_period_days));
        let omega = per_day(years(inputs.immunity_duration_years));
        let mu = per_day(years(inputs.life_expectancy_years));
        let sigma = per_day(days(inputs.latent_period_days));
        let beta = inputs.r0 * (gamma + mu + alpha) * (sigma + mu) / sigma;

        Self {
            alpha,
            gamma,
            omega,
            mu,
            sigma,
            beta,
        }
    }

    /// Basic reproduction number implied by these rates.
    pub fn basic_reproduction_number(&self) -> f64 {
        self.beta * self.sigma / ((self.sigma + self.mu) * (self.gamma + self.mu + self.alpha))
    }

    /// Total removal rate out of the infectious compartment.
    pub fn infectious_exit_rate(&self) -> f64 {
        self.gamma + self.mu + self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;
    use ef_core::{Tolerances, nearly_equal};

    #[test]
    fn reference_scenario_rates() {
        let inputs = ModelInputs::new(0.99, 3.0, 7.0, 14.0, 3000);
        let rates = derive(&inputs).unwrap();
        let tol = Tolerances::default();

        assert!(nearly_equal(rates.alpha, 0.01, tol));
        assert!(nearly_equal(rates.gamma, 1.0 / 14.0, tol));
        assert!(nearly_equal(rates.omega, 1.0 / 365.0, tol));
        assert!(nearly_equal(rates.mu, 1.0 / (365.0 * 76.0), tol));
        assert!(nearly_equal(rates.sigma, 1.0 / 7.0, tol));

        let expected_beta = 3.0 * (rates.gamma + rates.mu + rates.alpha) * (rates.sigma + rates.mu)
            / rates.sigma;
        assert!(nearly_equal(rates.beta, expected_beta, tol));
    }

    #[test]
    fn zero_death_onset_disables_alpha() {
        let inputs = ModelInputs::new(0.99, 3.0, 7.0, 14.0, 10).with_death_onset_days(0.0);
        let rates = derive(&inputs).unwrap();
        assert_eq!(rates.alpha, 0.0);
        assert!(rates.beta.is_finite());
    }

    #[test]
    fn beta_recovers_requested_r0() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        };
        for r0 in [0.5, 1.0, 2.5, 12.0] {
            let rates = derive(&ModelInputs::new(0.9, r0, 4.0, 9.0, 10)).unwrap();
            assert!(nearly_equal(rates.basic_reproduction_number(), r0, tol));
        }
    }

    #[test]
    fn invalid_inputs_fail() {
        let inputs = ModelInputs::new(0.99, -3.0, 7.0, 14.0, 10);
        let err = derive(&inputs).unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveValue { field: "r0", .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ef_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rates_positive_and_r0_roundtrips(
            r0 in 0.1_f64..20.0,
            latent in 0.5_f64..30.0,
            infectious in 0.5_f64..30.0,
            onset in 0.0_f64..500.0,
            immunity in 0.1_f64..10.0,
            life in 1.0_f64..100.0,
        ) {
            let inputs = ModelInputs::new(0.9, r0, latent, infectious, 10)
                .with_death_onset_days(onset)
                .with_immunity_duration_years(immunity)
                .with_life_expectancy_years(life);
            let rates = derive(&inputs).unwrap();
            prop_assert!(rates.alpha >= 0.0);
            prop_assert!(rates.gamma > 0.0 && rates.omega > 0.0 && rates.mu > 0.0);
            prop_assert!(rates.sigma > 0.0 && rates.beta > 0.0);
            let tol = Tolerances { abs: 1e-10, rel: 1e-10 };
            prop_assert!(nearly_equal(rates.basic_reproduction_number(), r0, tol));
        }
    }
}
