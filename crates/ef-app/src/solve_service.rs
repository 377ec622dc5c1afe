//! Simulation execution service.

use std::time::Instant;

use ef_core::Compartment;
use ef_model::ModelInputs;
use ef_sim::{
    ClampReport, EQUILIBRIUM_TOLERANCE, SimOptions, Trajectory, TrajectorySummary, run_sim,
    summarize,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::scenario::Scenario;

/// Fixed vertical scale of every series, in percent.
pub const Y_MAX_PERCENT: f64 = 100.0;

/// Percentage series for each compartment, as `(day, percent)` pairs.
///
/// This is the shape consumed by plotting frontends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutput {
    pub s: Vec<(usize, f64)>,
    pub e: Vec<(usize, f64)>,
    pub i: Vec<(usize, f64)>,
    pub r: Vec<(usize, f64)>,
    pub ymax: f64,
}

impl SolveOutput {
    pub fn from_trajectory(traj: &Trajectory) -> Self {
        let percent = |c: Compartment| -> Vec<(usize, f64)> {
            traj.states()
                .iter()
                .enumerate()
                .map(|(day, x)| (day, x.get(c) * Y_MAX_PERCENT))
                .collect()
        };
        Self {
            s: percent(Compartment::Susceptible),
            e: percent(Compartment::Exposed),
            i: percent(Compartment::Infectious),
            r: percent(Compartment::Recovered),
            ymax: Y_MAX_PERCENT,
        }
    }

    pub fn series(&self, c: Compartment) -> &[(usize, f64)] {
        match c {
            Compartment::Susceptible => &self.s,
            Compartment::Exposed => &self.e,
            Compartment::Infectious => &self.i,
            Compartment::Recovered => &self.r,
        }
    }

    /// Number of points per series (days + 1).
    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }
}

/// Output of a run plus its diagnostics.
#[derive(Debug, Clone)]
pub struct SolveResponse {
    pub output: SolveOutput,
    pub summary: TrajectorySummary,
    pub clamp: ClampReport,
    pub solve_time_s: f64,
}

/// Solve with the default options.
pub fn solve(inputs: &ModelInputs) -> AppResult<SolveOutput> {
    Ok(solve_with(inputs, &SimOptions::default())?.output)
}

pub fn solve_with(inputs: &ModelInputs, opts: &SimOptions) -> AppResult<SolveResponse> {
    let start = Instant::now();
    let traj = run_sim(inputs, opts)?;
    let solve_time_s = start.elapsed().as_secs_f64();

    let summary = summarize(&traj, EQUILIBRIUM_TOLERANCE);
    debug!(
        days = traj.days(),
        peak_day = summary.peak_infectious_day,
        solve_time_s,
        "solve finished"
    );

    Ok(SolveResponse {
        output: SolveOutput::from_trajectory(&traj),
        summary,
        clamp: traj.clamp,
        solve_time_s,
    })
}

pub fn run_scenario(scenario: &Scenario) -> AppResult<SolveResponse> {
    info!(name = %scenario.name, "running scenario");
    solve_with(&scenario.inputs, &scenario.sim_options())
}

/// Solve independent inputs in parallel. Results keep the order of `inputs`.
pub fn solve_batch(inputs: &[ModelInputs]) -> Vec<AppResult<SolveOutput>> {
    inputs.par_iter().map(solve).collect()
}
