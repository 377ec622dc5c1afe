/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Clamp a proportion into [0, 1].
///
/// Returns the clamped value and the distance it was moved (zero when already in range).
#[inline]
pub fn clamp_unit(v: Real) -> (Real, Real) {
    let c = v.clamp(0.0, 1.0);
    (c, (v - c).abs())
}
