//! Input validation.
//!
//! All checks run before any computation; inputs are never corrected.

use crate::inputs::ModelInputs;

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Range violation: {field} = {value} (must lie in [{min}, {max}])")]
    RangeViolation {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Non-positive value: {field} = {value} (must be > 0)")]
    NonPositiveValue { field: &'static str, value: f64 },

    #[error("Negative value: {field} = {value} (must be >= 0)")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("Non-finite value: {field} = {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error(
        "Initial susceptible proportion is negative: initial_susceptible ({initial_susceptible}) < vaccination_rate ({vaccination_rate})"
    )]
    InitialSusceptibleNegative {
        initial_susceptible: f64,
        vaccination_rate: f64,
    },
}

impl ValidationError {
    /// Name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::RangeViolation { field, .. }
            | ValidationError::NonPositiveValue { field, .. }
            | ValidationError::NegativeValue { field, .. }
            | ValidationError::NonFinite { field, .. } => field,
            ValidationError::InitialSusceptibleNegative { .. } => "vaccination_rate",
        }
    }
}

fn finite(field: &'static str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn unit_interval(field: &'static str, value: f64) -> ValidationResult<()> {
    if (0.0..=1.0).contains(&finite(field, value)?) {
        Ok(())
    } else {
        Err(ValidationError::RangeViolation {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn positive(field: &'static str, value: f64) -> ValidationResult<()> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveValue { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> ValidationResult<()> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeValue { field, value })
    }
}

/// Check every input against its bound, reporting the first violation.
pub fn validate_inputs(inputs: &ModelInputs) -> ValidationResult<()> {
    unit_interval("initial_susceptible", inputs.initial_susceptible)?;
    unit_interval("vaccination_rate", inputs.vaccination_rate)?;

    positive("r0", inputs.r0)?;
    positive("infectious_period_days", inputs.infectious_period_days)?;
    positive("latent_period_days", inputs.latent_period_days)?;
    positive("immunity_duration_years", inputs.immunity_duration_years)?;
    positive("life_expectancy_years", inputs.life_expectancy_years)?;
    if inputs.days == 0 {
        return Err(ValidationError::NonPositiveValue {
            field: "days",
            value: 0.0,
        });
    }

    non_negative("death_onset_days", inputs.death_onset_days)?;

    Ok(())
}

/// Reject inputs whose initial susceptible proportion (S0 - p) would be negative.
pub fn validate_initial_susceptible(inputs: &ModelInputs) -> ValidationResult<()> {
    if inputs.vaccination_rate > inputs.initial_susceptible {
        return Err(ValidationError::InitialSusceptibleNegative {
            initial_susceptible: inputs.initial_susceptible,
            vaccination_rate: inputs.vaccination_rate,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ModelInputs {
        ModelInputs::new(0.99, 3.0, 7.0, 14.0, 100)
    }

    #[test]
    fn accepts_reference_scenario() {
        validate_inputs(&base()).unwrap();
    }

    #[test]
    fn range_violations() {
        let err = validate_inputs(&ModelInputs {
            initial_susceptible: 1.2,
            ..base()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RangeViolation {
                field: "initial_susceptible",
                ..
            }
        ));

        let err = validate_inputs(&base().with_vaccination_rate(-0.1)).unwrap_err();
        assert_eq!(err.field(), "vaccination_rate");
        assert!(format!("{err}").contains("[0, 1]"));
    }

    #[test]
    fn non_positive_values() {
        let cases = [
            ("r0", base().with_r0(0.0)),
            (
                "infectious_period_days",
                ModelInputs {
                    infectious_period_days: -1.0,
                    ..base()
                },
            ),
            (
                "latent_period_days",
                ModelInputs {
                    latent_period_days: 0.0,
                    ..base()
                },
            ),
            ("immunity_duration_years", base().with_immunity_duration_years(0.0)),
            ("life_expectancy_years", base().with_life_expectancy_years(-76.0)),
            ("days", ModelInputs { days: 0, ..base() }),
        ];
        for (field, inputs) in cases {
            let err = validate_inputs(&inputs).unwrap_err();
            assert!(
                matches!(err, ValidationError::NonPositiveValue { .. }),
                "{field}: {err}"
            );
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn death_onset_zero_allowed_negative_rejected() {
        validate_inputs(&base().with_death_onset_days(0.0)).unwrap();
        let err = validate_inputs(&base().with_death_onset_days(-1.0)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NegativeValue {
                field: "death_onset_days",
                ..
            }
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let err = validate_inputs(&base().with_r0(f64::NAN)).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { field: "r0", .. }));
        let err = validate_inputs(&base().with_vaccination_rate(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { .. }));
    }

    #[test]
    fn initial_susceptible_check() {
        validate_initial_susceptible(&base()).unwrap();
        let inputs = ModelInputs {
            initial_susceptible: 0.3,
            ..base()
        };
        let err = validate_initial_susceptible(&inputs).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InitialSusceptibleNegative { .. }
        ));
    }
}
