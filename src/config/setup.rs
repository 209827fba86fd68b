pub mod parameters;

use std::{error::Error, fs::File, io::Read, path::Path};

use self::parameters::SimulationParameters;

#[derive(serde::Serialize, serde::Deserialize, Default)]
struct ConfigYaml {
    #[serde(default)]
    parameters: SimulationParameters,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupConfig {
    pub parameters: SimulationParameters,
}

impl SetupConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a YAML setup. Missing fields keep their default values.
    pub fn from_yaml_str(contents: &str) -> Result<Self, Box<dyn Error>> {
        let config_raw: ConfigYaml = serde_yaml::from_str(contents)?;
        Ok(SetupConfig {
            parameters: config_raw.parameters,
        })
    }

    pub fn to_yaml_string(&self) -> Result<String, Box<dyn Error>> {
        let config_raw = ConfigYaml {
            parameters: self.parameters,
        };
        Ok(serde_yaml::to_string(&config_raw)?)
    }

    pub fn print(&self) {
        let p = &self.parameters;
        println!(
            "\
Parameters:
  Masses:
    Sprung mass: {ms} kg
    Unsprung mass: {mu} kg

  Shock (shock axis):
    Spring rate: {ks} N/m
    Damping: {cs} N·s/m
    Motion ratio: {ell:.3}

  Tire and road:
    Tire rate: {kt} N/m
    Bump height: {bump} mm
    Simulated time: {t_total} s

Wheel-equivalent rates:
  Spring rate: {k_wheel:.0} N/m
  Damping: {c_wheel:.0} N·s/m

Computed derived parameters (for info only):
  Ride rate: {k_ride:.0} N/m
  Body natural frequency: {f_body:.2} Hz
  Wheel hop frequency: {f_wheel:.2} Hz
  Body damping ratio: {zeta:.3}",
            ms = p.sprung_mass,
            mu = p.unsprung_mass,
            ks = p.spring_rate,
            cs = p.damping_coeff,
            ell = p.motion_ratio,
            kt = p.tire_rate,
            bump = 1e3 * p.bump_height,
            t_total = p.total_time,
            k_wheel = p.wheel_spring_rate(),
            c_wheel = p.wheel_damping_coeff(),
            k_ride = p.ride_rate(),
            f_body = p.body_natural_frequency(),
            f_wheel = p.wheel_hop_frequency(),
            zeta = p.body_damping_ratio(),
        );
    }
}
