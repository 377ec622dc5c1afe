// ef-core/src/units.rs

use uom::si::f64::Time as UomTime;

// Public canonical unit type (SI, f64)
pub type Time = UomTime;

/// Days in one model year. Matches the uom `year` unit (365 d).
pub const DAYS_PER_YEAR: f64 = 365.0;

#[inline]
pub fn days(v: f64) -> Time {
    use uom::si::time::day;
    Time::new::<day>(v)
}

#[inline]
pub fn years(v: f64) -> Time {
    use uom::si::time::year;
    Time::new::<year>(v)
}

/// Express a time quantity in days, the time unit of every rate in the model.
#[inline]
pub fn in_days(t: Time) -> f64 {
    use uom::si::time::day;
    t.get::<day>()
}

/// Per-day rate of a process whose mean duration is `t`.
#[inline]
pub fn per_day(t: Time) -> f64 {
    1.0 / in_days(t)
}
