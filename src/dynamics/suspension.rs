use nalgebra::Vector2;

use crate::config::setup::parameters::SimulationParameters;
use crate::state::{SimState, SPRUNG, UNSPRUNG};

/// Forces acting across the suspension at one instant.
///
/// Spring and damper forces are measured along the shock axis and act on the
/// relative displacement of the two masses directly; the motion ratio plays no
/// part here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuspensionForces {
    pub spring: f64,
    pub damper: f64,
    pub tire: f64,
}

pub fn suspension_forces(
    params: &SimulationParameters,
    state: &SimState,
    road: f64,
) -> SuspensionForces {
    let x = state.x;
    let v = state.v;
    SuspensionForces {
        spring: params.spring_rate * (x[SPRUNG] - x[UNSPRUNG]),
        damper: params.damping_coeff * (v[SPRUNG] - v[UNSPRUNG]),
        tire: params.tire_rate * (x[UNSPRUNG] - road),
    }
}

impl SuspensionForces {
    /// Accelerations of the sprung and unsprung masses.
    pub fn accelerations(&self, params: &SimulationParameters) -> Vector2<f64> {
        // The shock pulls the body down when compressed upward; the tire
        // pushes the wheel back toward the road surface.
        Vector2::new(
            (-self.spring - self.damper) / params.sprung_mass,
            (self.spring + self.damper - self.tire) / params.unsprung_mass,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_at(x1: f64, v1: f64, x2: f64, v2: f64) -> SimState {
        let mut state = SimState::new();
        state.x = Vector2::new(x1, x2);
        state.v = Vector2::new(v1, v2);
        state
    }

    #[test]
    fn test_rest_has_no_force() {
        let p = SimulationParameters::default();
        let f = suspension_forces(&p, &SimState::new(), 0.0);
        assert_eq!(f.spring, 0.0);
        assert_eq!(f.damper, 0.0);
        assert_eq!(f.tire, 0.0);
        assert_eq!(f.accelerations(&p), Vector2::zeros());
    }

    #[test]
    fn test_road_lift_pushes_wheel_up() {
        let p = SimulationParameters::default();
        let f = suspension_forces(&p, &SimState::new(), 0.01);
        assert_relative_eq!(f.tire, -p.tire_rate * 0.01);
        let a = f.accelerations(&p);
        assert_eq!(a[SPRUNG], 0.0);
        assert_relative_eq!(a[UNSPRUNG], p.tire_rate * 0.01 / p.unsprung_mass);
    }

    #[test]
    fn test_shock_forces_are_equal_and_opposite() {
        let p = SimulationParameters::default();
        let f = suspension_forces(&p, &state_at(0.02, 0.3, -0.01, -0.1), 0.0);
        assert_relative_eq!(f.spring, p.spring_rate * 0.03, epsilon = 1e-9);
        assert_relative_eq!(f.damper, p.damping_coeff * 0.4, epsilon = 1e-9);

        // With the tire unloaded, momentum exchanged through the shock balances.
        let f = SuspensionForces { tire: 0.0, ..f };
        let a = f.accelerations(&p);
        assert_relative_eq!(
            a[SPRUNG] * p.sprung_mass + a[UNSPRUNG] * p.unsprung_mass,
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_motion_ratio_does_not_enter_forces() {
        let p = SimulationParameters::default();
        let q = SimulationParameters {
            motion_ratio: 0.5,
            ..p
        };
        let s = state_at(0.02, 0.3, -0.01, -0.1);
        assert_eq!(
            suspension_forces(&p, &s, 0.005),
            suspension_forces(&q, &s, 0.005)
        );
    }
}
