//! Fixed-step time integrators.

use crate::error::{SimError, SimResult};
use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
///
/// No error control: local error is O(dt^5), so accumulated error grows with the
/// number of steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive and finite",
            });
        }

        let k1 = model.rhs(t, x)?;

        let x2 = model.advance(x, &k1, 0.5 * dt);
        let k2 = model.rhs(t + 0.5 * dt, &x2)?;

        let x3 = model.advance(x, &k2, 0.5 * dt);
        let k3 = model.rhs(t + 0.5 * dt, &x3)?;

        let x4 = model.advance(x, &k3, dt);
        let k4 = model.rhs(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.advance(x, &k_sum, dt / 6.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dx/dt = -lambda x
    struct Decay {
        lambda: f64,
    }

    impl TransientModel for Decay {
        type State = f64;
        type Rate = f64;

        fn rhs(&self, _t: f64, x: &f64) -> SimResult<f64> {
            Ok(-self.lambda * x)
        }

        fn advance(&self, x: &f64, k: &f64, dt: f64) -> f64 {
            x + dt * k
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    /// dx/dt = t^3, integrated exactly by RK4.
    struct Cubic;

    impl TransientModel for Cubic {
        type State = f64;
        type Rate = f64;

        fn rhs(&self, t: f64, _x: &f64) -> SimResult<f64> {
            Ok(t * t * t)
        }

        fn advance(&self, x: &f64, k: &f64, dt: f64) -> f64 {
            x + dt * k
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    fn integrate_decay(dt: f64, steps: usize) -> f64 {
        let model = Decay { lambda: 1.0 };
        let mut x = 1.0;
        for n in 0..steps {
            x = RK4.step(&model, n as f64 * dt, &x, dt).unwrap();
        }
        x
    }

    #[test]
    fn single_step_matches_taylor_polynomial() {
        // For linear decay RK4 reproduces exp(-h) to 4th order exactly.
        let h: f64 = 0.5;
        let x = RK4.step(&Decay { lambda: 1.0 }, 0.0, &1.0, h).unwrap();
        let taylor = 1.0 - h + h.powi(2) / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert!((x - taylor).abs() < 1e-15);
    }

    #[test]
    fn fourth_order_convergence() {
        let exact = (-1.0_f64).exp();
        let err_coarse = (integrate_decay(0.1, 10) - exact).abs();
        let err_fine = (integrate_decay(0.05, 20) - exact).abs();
        let ratio = err_coarse / err_fine;
        // Halving dt cuts global error by ~2^4.
        assert!(ratio > 14.0 && ratio < 18.0, "ratio = {ratio}");
    }

    #[test]
    fn polynomial_time_dependence_is_exact() {
        let x = RK4.step(&Cubic, 1.0, &0.0, 1.0).unwrap();
        // integral of t^3 from 1 to 2 = (16 - 1) / 4
        assert!((x - 3.75).abs() < 1e-14);
    }

    #[test]
    fn rejects_non_positive_step() {
        let model = Decay { lambda: 1.0 };
        assert!(RK4.step(&model, 0.0, &1.0, 0.0).is_err());
        assert!(RK4.step(&model, 0.0, &1.0, -1.0).is_err());
        assert!(RK4.step(&model, 0.0, &1.0, f64::NAN).is_err());
    }
}
