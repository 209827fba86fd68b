use std::f64::consts::PI;

/// Duration of the single half-sine bump, in seconds.
pub const BUMP_DURATION: f64 = 0.1;

/// Road surface displacement under the tire at time `t`.
///
/// A single half-sine bump of height `bump_height` starting at `t = 0`; flat
/// road everywhere else.
pub fn road_displacement(t: f64, bump_height: f64) -> f64 {
    if (0.0..BUMP_DURATION).contains(&t) {
        bump_height * (PI * t / BUMP_DURATION).sin()
    } else {
        0.0
    }
}
