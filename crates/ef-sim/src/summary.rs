//! Headline numbers of a trajectory.

use ef_core::Compartment;
use ef_model::{CompartmentState, endemic_equilibrium};

use crate::sim::Trajectory;

/// Max-norm of the final derivatives below which a run counts as settled.
pub const EQUILIBRIUM_TOLERANCE: f64 = 1e-4;

#[derive(Clone, Debug)]
pub struct TrajectorySummary {
    pub peak_infectious_day: usize,
    pub peak_infectious: f64,
    pub final_state: CompartmentState,
    /// Max-norm of the derivatives evaluated at the final state.
    pub final_derivative_norm: f64,
    /// Analytic endemic steady state, when the disease can persist.
    pub endemic: Option<CompartmentState>,
    /// Max-norm distance from the final state to `endemic`.
    pub distance_to_endemic: Option<f64>,
    pub reached_equilibrium: bool,
}

pub fn summarize(traj: &Trajectory, tolerance: f64) -> TrajectorySummary {
    let (peak_infectious_day, peak_infectious) = traj.peak(Compartment::Infectious);
    let final_state = *traj.final_state();
    let final_derivative_norm = traj.model().derivatives(&final_state).max_abs();
    let endemic = endemic_equilibrium(&traj.rates, traj.vaccination_rate);

    TrajectorySummary {
        peak_infectious_day,
        peak_infectious,
        final_state,
        final_derivative_norm,
        endemic,
        distance_to_endemic: endemic.map(|eq| final_state.max_abs_diff(&eq)),
        reached_equilibrium: final_derivative_norm < tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimOptions, run_sim};
    use ef_model::ModelInputs;

    #[test]
    fn sub_threshold_run_has_no_endemic_state() {
        let inputs = ModelInputs::new(0.99, 0.5, 7.0, 14.0, 200);
        let traj = run_sim(&inputs, &SimOptions::default()).unwrap();
        let summary = summarize(&traj, EQUILIBRIUM_TOLERANCE);
        assert!(summary.endemic.is_none());
        assert!(summary.distance_to_endemic.is_none());
        assert_eq!(summary.final_state, *traj.final_state());
    }

    #[test]
    fn short_run_has_not_settled() {
        let inputs = ModelInputs::new(0.99, 3.0, 7.0, 14.0, 60);
        let traj = run_sim(&inputs, &SimOptions::default()).unwrap();
        let summary = summarize(&traj, EQUILIBRIUM_TOLERANCE);
        assert!(!summary.reached_equilibrium);
        assert!(summary.endemic.is_some());
        assert!(summary.peak_infectious > 0.0);
    }
}
