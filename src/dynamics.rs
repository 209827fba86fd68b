pub mod road;
pub mod suspension;

use log::debug;

use crate::config::setup::parameters::SimulationParameters;
use crate::dynamics::road::road_displacement;
use crate::dynamics::suspension::suspension_forces;
use crate::state::*;

/// Fixed integration step, in seconds.
pub const DT: f64 = 0.001;

/// Advances the state by one step of semi-implicit Euler.
///
/// Forces are evaluated on the state at the start of the step. Velocities are
/// updated first and positions then move with the new velocities; swapping
/// this order changes the trajectory.
pub fn update(params: &SimulationParameters, state: &mut SimState) {
    let road = road_displacement(state.t(), params.bump_height);
    let a = suspension_forces(params, state, road).accelerations(params);

    state.v += a * DT;
    state.x += state.v * DT;

    state.step += 1;
}

/// Runs the quarter-car model over one bump for `params.total_time` seconds.
///
/// Sample `i` is labelled `t = i * DT` and holds the positions after the step
/// taken from that time. Non-physical parameters are not rejected; they show
/// up as diverging or non-finite samples.
pub fn simulate(params: &SimulationParameters) -> SimulationResult {
    let n_samples = params.num_steps().map_or(0, |n| n + 1);
    debug!(
        "simulate: total_time={} s, dt={} s, samples={}",
        params.total_time, DT, n_samples
    );

    let mut time = Vec::with_capacity(n_samples);
    let mut sprung_pos = Vec::with_capacity(n_samples);
    let mut unsprung_pos = Vec::with_capacity(n_samples);

    let mut state = SimState::new();
    for _ in 0..n_samples {
        let t = state.t();
        update(params, &mut state);

        time.push(t);
        sprung_pos.push(state.x[SPRUNG]);
        unsprung_pos.push(state.x[UNSPRUNG]);
    }

    SimulationResult::from_trajectory(params, time, sprung_pos, unsprung_pos)
}
