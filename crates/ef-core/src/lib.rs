//! ef-core: stable foundation for epiflow.
//!
//! Contains:
//! - units (uom time types + day/year constructors)
//! - numeric (Real + tolerances + float helpers)
//! - compartment (stable names for the four SEIRS compartments)
//! - error (shared error types)

pub mod compartment;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use compartment::Compartment;
pub use error::{EfError, EfResult};
pub use numeric::*;
pub use units::*;
