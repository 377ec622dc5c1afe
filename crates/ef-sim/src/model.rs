//! TransientModel trait for pluggable dynamic systems.

use ef_model::{CompartmentState, Derivatives, TransitionModel};

use crate::error::SimResult;

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type and the type of its time derivative
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Arithmetic for integration: advance a state along a derivative, add and scale derivatives
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;
    /// Time derivative of `State`.
    type Rate: Clone;

    /// Compute state derivative dxdt = f(t, x).
    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::Rate>;

    /// result = x + dt * k.
    fn advance(&self, x: &Self::State, k: &Self::Rate, dt: f64) -> Self::State;

    /// Add two derivatives element-wise: result = a + b.
    fn add(&self, a: &Self::Rate, b: &Self::Rate) -> Self::Rate;

    /// Scale a derivative by a scalar: result = scale * a.
    fn scale(&self, a: &Self::Rate, scale: f64) -> Self::Rate;
}

/// The SEIRS equations are autonomous; `t` is ignored.
impl TransientModel for TransitionModel {
    type State = CompartmentState;
    type Rate = Derivatives;

    fn rhs(&self, _t: f64, x: &CompartmentState) -> SimResult<Derivatives> {
        Ok(self.derivatives(x))
    }

    fn advance(&self, x: &CompartmentState, k: &Derivatives, dt: f64) -> CompartmentState {
        x.advance(k, dt)
    }

    fn add(&self, a: &Derivatives, b: &Derivatives) -> Derivatives {
        *a + *b
    }

    fn scale(&self, a: &Derivatives, scale: f64) -> Derivatives {
        *a * scale
    }
}
