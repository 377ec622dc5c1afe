//! Named compartment records.

use core::ops::{Add, Mul};

use ef_core::{Compartment, clamp_unit};
use serde::{Deserialize, Serialize};

/// Proportions of the population in each compartment.
///
/// Values lie in [0, 1] once clamped; the sum is not forced to 1 because births,
/// vaccination and mortality do not conserve the total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompartmentState {
    pub s: f64,
    pub e: f64,
    pub i: f64,
    pub r: f64,
}

/// Instantaneous rate of change of a `CompartmentState`, per day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Derivatives {
    pub ds: f64,
    pub de: f64,
    pub di: f64,
    pub dr: f64,
}

impl CompartmentState {
    pub fn new(s: f64, e: f64, i: f64, r: f64) -> Self {
        Self { s, e, i, r }
    }

    pub fn get(&self, c: Compartment) -> f64 {
        match c {
            Compartment::Susceptible => self.s,
            Compartment::Exposed => self.e,
            Compartment::Infectious => self.i,
            Compartment::Recovered => self.r,
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.s, self.e, self.i, self.r]
    }

    /// Sum of the four proportions.
    pub fn total(&self) -> f64 {
        self.s + self.e + self.i + self.r
    }

    /// `self + h * d`, componentwise.
    pub fn advance(&self, d: &Derivatives, h: f64) -> Self {
        Self {
            s: self.s + h * d.ds,
            e: self.e + h * d.de,
            i: self.i + h * d.di,
            r: self.r + h * d.dr,
        }
    }

    /// Clamp every component into [0, 1] independently.
    ///
    /// Also returns how far each component had to move, in state order.
    pub fn clamped(&self) -> (Self, [f64; 4]) {
        let (s, ds) = clamp_unit(self.s);
        let (e, de) = clamp_unit(self.e);
        let (i, di) = clamp_unit(self.i);
        let (r, dr) = clamp_unit(self.r);
        (Self { s, e, i, r }, [ds, de, di, dr])
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Largest componentwise distance to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Derivatives {
    pub fn new(ds: f64, de: f64, di: f64, dr: f64) -> Self {
        Self { ds, de, di, dr }
    }

    pub fn get(&self, c: Compartment) -> f64 {
        match c {
            Compartment::Susceptible => self.ds,
            Compartment::Exposed => self.de,
            Compartment::Infectious => self.di,
            Compartment::Recovered => self.dr,
        }
    }

    /// Max-norm of the derivative vector.
    pub fn max_abs(&self) -> f64 {
        [self.ds, self.de, self.di, self.dr]
            .iter()
            .fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }
}

impl Add for Derivatives {
    type Output = Derivatives;

    fn add(self, rhs: Derivatives) -> Derivatives {
        Derivatives {
            ds: self.ds + rhs.ds,
            de: self.de + rhs.de,
            di: self.di + rhs.di,
            dr: self.dr + rhs.dr,
        }
    }
}

impl Mul<f64> for Derivatives {
    type Output = Derivatives;

    fn mul(self, k: f64) -> Derivatives {
        Derivatives {
            ds: self.ds * k,
            de: self.de * k,
            di: self.di * k,
            dr: self.dr * k,
        }
    }
}
