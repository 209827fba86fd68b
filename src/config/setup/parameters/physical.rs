use std::f64::consts::PI;

use super::simulation::SimulationParameters;

// Wheel-equivalent quantities. These are reported next to the results and
// never feed back into the integrator, which works in shock-axis terms.
impl SimulationParameters {
    pub fn wheel_spring_rate(&self) -> f64 {
        // k_wheel = k_shock * l^2
        self.spring_rate * self.motion_ratio * self.motion_ratio
    }

    pub fn wheel_damping_coeff(&self) -> f64 {
        // c_wheel = c_shock * l^2
        self.damping_coeff * self.motion_ratio * self.motion_ratio
    }

    /// Wheel rate and tire rate acting in series.
    pub fn ride_rate(&self) -> f64 {
        let k_wheel = self.wheel_spring_rate();
        k_wheel * self.tire_rate / (k_wheel + self.tire_rate)
    }

    /// Body bounce frequency in Hz.
    pub fn body_natural_frequency(&self) -> f64 {
        (self.ride_rate() / self.sprung_mass).sqrt() / (2.0 * PI)
    }

    /// Wheel hop frequency in Hz, with the body held fixed.
    pub fn wheel_hop_frequency(&self) -> f64 {
        ((self.wheel_spring_rate() + self.tire_rate) / self.unsprung_mass).sqrt() / (2.0 * PI)
    }

    pub fn body_damping_ratio(&self) -> f64 {
        // zeta = c / (2 sqrt(k m))
        self.wheel_damping_coeff() / (2.0 * (self.ride_rate() * self.sprung_mass).sqrt())
    }
}
