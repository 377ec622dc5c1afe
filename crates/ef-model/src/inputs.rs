//! Epidemiological inputs for one simulation request.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEATH_ONSET_DAYS: f64 = 100.0;
pub const DEFAULT_IMMUNITY_DURATION_YEARS: f64 = 1.0;
pub const DEFAULT_LIFE_EXPECTANCY_YEARS: f64 = 76.0;
pub const DEFAULT_VACCINATION_RATE: f64 = 0.5;

/// Inputs of a single SEIRS run.
///
/// Periods are in days except immunity duration and life expectancy, which are in years.
/// A `death_onset_days` of zero disables disease mortality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    /// Initial susceptible proportion, in [0, 1].
    pub initial_susceptible: f64,
    /// Basic reproduction number.
    pub r0: f64,
    pub latent_period_days: f64,
    pub infectious_period_days: f64,
    /// Number of simulated days; the trajectory has `days + 1` points.
    pub days: usize,
    #[serde(default = "default_death_onset")]
    pub death_onset_days: f64,
    #[serde(default = "default_immunity_duration")]
    pub immunity_duration_years: f64,
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy_years: f64,
    /// Fraction of births vaccinated, in [0, 1].
    #[serde(default = "default_vaccination_rate")]
    pub vaccination_rate: f64,
}

fn default_death_onset() -> f64 {
    DEFAULT_DEATH_ONSET_DAYS
}

fn default_immunity_duration() -> f64 {
    DEFAULT_IMMUNITY_DURATION_YEARS
}

fn default_life_expectancy() -> f64 {
    DEFAULT_LIFE_EXPECTANCY_YEARS
}

fn default_vaccination_rate() -> f64 {
    DEFAULT_VACCINATION_RATE
}

impl ModelInputs {
    /// Build inputs from the required values, filling the rest with the standard defaults.
    pub fn new(
        initial_susceptible: f64,
        r0: f64,
        latent_period_days: f64,
        infectious_period_days: f64,
        days: usize,
    ) -> Self {
        Self {
            initial_susceptible,
            r0,
            latent_period_days,
            infectious_period_days,
            days,
            death_onset_days: DEFAULT_DEATH_ONSET_DAYS,
            immunity_duration_years: DEFAULT_IMMUNITY_DURATION_YEARS,
            life_expectancy_years: DEFAULT_LIFE_EXPECTANCY_YEARS,
            vaccination_rate: DEFAULT_VACCINATION_RATE,
        }
    }

    pub fn with_death_onset_days(mut self, v: f64) -> Self {
        self.death_onset_days = v;
        self
    }

    pub fn with_immunity_duration_years(mut self, v: f64) -> Self {
        self.immunity_duration_years = v;
        self
    }

    pub fn with_life_expectancy_years(mut self, v: f64) -> Self {
        self.life_expectancy_years = v;
        self
    }

    pub fn with_vaccination_rate(mut self, v: f64) -> Self {
        self.vaccination_rate = v;
        self
    }

    pub fn with_r0(mut self, v: f64) -> Self {
        self.r0 = v;
        self
    }

    /// Whether disease-induced mortality is active.
    pub fn has_disease_mortality(&self) -> bool {
        self.death_onset_days > 0.0
    }
}
