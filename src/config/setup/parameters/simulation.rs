use crate::dynamics::DT;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SimulationParameters {
    // Masses.
    pub sprung_mass: f64,
    pub unsprung_mass: f64,
    // Shock, measured along the shock axis.
    pub spring_rate: f64,
    pub damping_coeff: f64,
    // Tire contact spring, vertical.
    pub tire_rate: f64,
    // Shock travel per unit wheel travel.
    pub motion_ratio: f64,
    // Road input.
    pub bump_height: f64,
    // Simulated duration.
    pub total_time: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            sprung_mass: 350.0,
            unsprung_mass: 45.0,
            spring_rate: 35000.0,
            damping_coeff: 2500.0,
            tire_rate: 200000.0,
            motion_ratio: 0.85,
            bump_height: 0.08,
            total_time: 2.0,
        }
    }
}

/// Number of fixed steps needed to cover `t` seconds.
pub fn to_steps(t: f64) -> usize {
    (t / DT).ceil() as usize
}

impl SimulationParameters {
    /// Steps covering `total_time`. `None` when the duration is negative or NaN,
    /// in which case a run produces no samples at all.
    pub fn num_steps(&self) -> Option<usize> {
        let n = (self.total_time / DT).ceil();
        (n >= 0.0).then_some(n as usize)
    }

    /// Names of the parameters that are non-finite or not strictly positive.
    ///
    /// The simulator runs regardless; this exists so a host can tell the user
    /// why the output diverges.
    pub fn nonphysical_fields(&self) -> Vec<&'static str> {
        [
            ("sprung_mass", self.sprung_mass),
            ("unsprung_mass", self.unsprung_mass),
            ("spring_rate", self.spring_rate),
            ("damping_coeff", self.damping_coeff),
            ("tire_rate", self.tire_rate),
            ("motion_ratio", self.motion_ratio),
            ("total_time", self.total_time),
        ]
        .into_iter()
        .filter(|(_, v)| !(v.is_finite() && *v > 0.0))
        .map(|(name, _)| name)
        .chain((!self.bump_height.is_finite()).then_some("bump_height"))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step_count() {
        let p = SimulationParameters::default();
        assert_eq!(p.num_steps(), Some(2000));
    }

    #[test]
    fn test_partial_step_rounds_up() {
        let p = SimulationParameters {
            total_time: 0.0105,
            ..Default::default()
        };
        assert_eq!(p.num_steps(), Some(11));
    }

    #[test]
    fn test_degenerate_durations() {
        let zero = SimulationParameters {
            total_time: 0.0,
            ..Default::default()
        };
        assert_eq!(zero.num_steps(), Some(0));

        let negative = SimulationParameters {
            total_time: -1.0,
            ..Default::default()
        };
        assert_eq!(negative.num_steps(), None);

        let nan = SimulationParameters {
            total_time: f64::NAN,
            ..Default::default()
        };
        assert_eq!(nan.num_steps(), None);
    }

    #[test]
    fn test_to_steps() {
        assert_eq!(to_steps(0.01), 10);
        assert_eq!(to_steps(0.0), 0);
    }

    #[test]
    fn test_nonphysical_fields() {
        assert!(SimulationParameters::default().nonphysical_fields().is_empty());

        let p = SimulationParameters {
            sprung_mass: 0.0,
            tire_rate: -1.0,
            bump_height: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            p.nonphysical_fields(),
            vec!["sprung_mass", "tire_rate", "bump_height"]
        );
    }

    #[test]
    fn test_zero_bump_is_physical() {
        let p = SimulationParameters {
            bump_height: 0.0,
            ..Default::default()
        };
        assert!(p.nonphysical_fields().is_empty());
    }
}
