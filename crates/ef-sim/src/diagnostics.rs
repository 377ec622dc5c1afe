//! Bookkeeping for values clamped back into [0, 1] during a run.

use ef_core::Compartment;

/// How often and how far integration output left [0, 1].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClampReport {
    /// The initial state needed clamping (S0 - p < 0).
    pub initial_clamped: bool,
    /// Number of integration steps where at least one component was clamped.
    pub steps_clamped: usize,
    /// Per-compartment clamp counts, in state order.
    pub components_clamped: [usize; 4],
    /// Largest distance any component was moved.
    pub max_excursion: f64,
    /// First day whose stored state differs from the raw RK4 output.
    pub first_clamped_day: Option<usize>,
}

impl ClampReport {
    /// Record the excursions of the state stored for `day` (day 0 is the initial condition).
    pub fn record(&mut self, day: usize, excursions: &[f64; 4]) {
        let mut any = false;
        for (count, &exc) in self.components_clamped.iter_mut().zip(excursions) {
            if exc > 0.0 {
                *count += 1;
                any = true;
                self.max_excursion = self.max_excursion.max(exc);
            }
        }
        if !any {
            return;
        }
        if day == 0 {
            self.initial_clamped = true;
        } else {
            self.steps_clamped += 1;
        }
        self.first_clamped_day.get_or_insert(day);
    }

    pub fn any(&self) -> bool {
        self.first_clamped_day.is_some()
    }

    pub fn count(&self, c: Compartment) -> usize {
        self.components_clamped[c.index()]
    }
}
