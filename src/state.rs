use nalgebra::Vector2;

use crate::config::setup::parameters::SimulationParameters;
use crate::dynamics::DT;

// Component indices into the state vectors.
pub const SPRUNG: usize = 0;
pub const UNSPRUNG: usize = 1;

/// Integration state of a single run. Both masses start at rest in the
/// undisturbed position.
#[derive(Clone, Debug)]
pub struct SimState {
    pub x: Vector2<f64>,
    pub v: Vector2<f64>,
    pub step: usize,
}

impl SimState {
    pub fn new() -> SimState {
        SimState {
            x: Vector2::zeros(),
            v: Vector2::zeros(),
            step: 0,
        }
    }

    /// Time of the current step. Computed from the step count rather than
    /// accumulated, so it does not drift.
    pub fn t(&self) -> f64 {
        self.step as f64 * DT
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wheel-equivalent rates, reported alongside the series.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WheelRates {
    pub motion_ratio: f64,
    pub spring_rate: f64,
    pub damping_coeff: f64,
}

impl WheelRates {
    pub fn new(params: &SimulationParameters) -> Self {
        WheelRates {
            motion_ratio: params.motion_ratio,
            spring_rate: params.wheel_spring_rate(),
            damping_coeff: params.wheel_damping_coeff(),
        }
    }
}

/// Output of one simulation run: parallel series indexed by step.
///
/// Positions are in metres, travels in millimetres.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub time: Vec<f64>,
    pub sprung_pos: Vec<f64>,
    pub unsprung_pos: Vec<f64>,
    pub shock_travel: Vec<f64>,
    pub wheel_travel: Vec<f64>,
    pub wheel_rates: WheelRates,
}

/// Peak absolute values over a run.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ResultSummary {
    pub peak_sprung_pos: f64,
    pub peak_unsprung_pos: f64,
    pub peak_shock_travel: f64,
    pub peak_wheel_travel: f64,
}

fn peak_abs(xs: &[f64]) -> f64 {
    xs.iter().fold(0.0f64, |m, x| m.max(x.abs()))
}

impl SimulationResult {
    /// Builds the reported series from the raw position history.
    ///
    /// This is the only place the motion ratio touches the trajectories:
    /// shock travel is wheel travel divided by it.
    pub fn from_trajectory(
        params: &SimulationParameters,
        time: Vec<f64>,
        sprung_pos: Vec<f64>,
        unsprung_pos: Vec<f64>,
    ) -> Self {
        let (shock_travel, wheel_travel): (Vec<f64>, Vec<f64>) = sprung_pos
            .iter()
            .zip(unsprung_pos.iter())
            .map(|(x1, x2)| {
                (
                    (x1 - x2) * 1000.0 / params.motion_ratio,
                    (x1 - x2) * 1000.0,
                )
            })
            .unzip();

        SimulationResult {
            time,
            sprung_pos,
            unsprung_pos,
            shock_travel,
            wheel_travel,
            wheel_rates: WheelRates::new(params),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    // NaN samples are skipped by the fold.
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            peak_sprung_pos: peak_abs(&self.sprung_pos),
            peak_unsprung_pos: peak_abs(&self.unsprung_pos),
            peak_shock_travel: peak_abs(&self.shock_travel),
            peak_wheel_travel: peak_abs(&self.wheel_travel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_state_time_from_step() {
        let mut s = SimState::new();
        assert_eq!(s.t(), 0.0);
        s.step = 2000;
        assert_relative_eq!(s.t(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_travel_from_trajectory() {
        let p = SimulationParameters {
            motion_ratio: 0.5,
            ..Default::default()
        };
        let r = SimulationResult::from_trajectory(
            &p,
            vec![0.0, 0.001],
            vec![0.0, 0.012],
            vec![0.0, 0.002],
        );
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r.wheel_travel[1], 10.0, epsilon = 1e-12);
        assert_relative_eq!(r.shock_travel[1], 20.0, epsilon = 1e-12);
        assert_eq!(r.wheel_travel[0], 0.0);
        assert_eq!(r.wheel_rates.motion_ratio, 0.5);
    }

    #[test]
    fn test_empty_trajectory() {
        let p = SimulationParameters::default();
        let r = SimulationResult::from_trajectory(&p, vec![], vec![], vec![]);
        assert!(r.is_empty());
        assert!(r.shock_travel.is_empty());
        assert_eq!(r.summary().peak_wheel_travel, 0.0);
    }

    #[test]
    fn test_summary_peaks() {
        let p = SimulationParameters {
            motion_ratio: 1.0,
            ..Default::default()
        };
        let r = SimulationResult::from_trajectory(
            &p,
            vec![0.0, 0.001, 0.002],
            vec![0.0, -0.03, 0.01],
            vec![0.0, 0.01, 0.0],
        );
        let s = r.summary();
        assert_relative_eq!(s.peak_sprung_pos, 0.03);
        assert_relative_eq!(s.peak_unsprung_pos, 0.01);
        assert_relative_eq!(s.peak_wheel_travel, 40.0, epsilon = 1e-9);
        assert_relative_eq!(s.peak_shock_travel, 40.0, epsilon = 1e-9);
    }
}
