use std::{
    error::Error,
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use log::{info, warn};
use quartercar::{
    config::{
        run::RunParams,
        setup::{parameters::SimulationParameters, SetupConfig},
    },
    dynamics::simulate,
    output::{write_result, OutputFormat},
};

#[derive(Debug, clap::Parser)]
#[command(
    name = "quartercar_run",
    about = "Simulate a quarter-car suspension driving over a single bump"
)]
pub struct RunCli {
    /// YAML setup file; defaults are used for anything it leaves out.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(long = "sprung-mass")]
    pub sprung_mass: Option<f64>,

    #[arg(long = "unsprung-mass")]
    pub unsprung_mass: Option<f64>,

    #[arg(long = "spring-rate")]
    pub spring_rate: Option<f64>,

    #[arg(long = "damping-coeff")]
    pub damping_coeff: Option<f64>,

    #[arg(long = "tire-rate")]
    pub tire_rate: Option<f64>,

    #[arg(long = "motion-ratio")]
    pub motion_ratio: Option<f64>,

    #[arg(long = "bump-height")]
    pub bump_height: Option<f64>,

    #[arg(short = 't', long = "total-time")]
    pub total_time: Option<f64>,

    /// Interval between written samples, in seconds.
    #[arg(short = 'd', long = "dt-view")]
    pub dt_view: Option<f64>,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Output file; standard output when omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Skip the parameter summary.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl RunCli {
    fn apply_overrides(&self, params: &mut SimulationParameters) {
        let overrides = [
            (self.sprung_mass, &mut params.sprung_mass),
            (self.unsprung_mass, &mut params.unsprung_mass),
            (self.spring_rate, &mut params.spring_rate),
            (self.damping_coeff, &mut params.damping_coeff),
            (self.tire_rate, &mut params.tire_rate),
            (self.motion_ratio, &mut params.motion_ratio),
            (self.bump_height, &mut params.bump_height),
            (self.total_time, &mut params.total_time),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = RunCli::parse();

    let mut setup_config = match &args.config {
        Some(path) => {
            info!("Reading setup from {}", path.display());
            SetupConfig::parse(path)?
        }
        None => {
            info!("No setup file given, using default parameters");
            SetupConfig::default()
        }
    };
    args.apply_overrides(&mut setup_config.parameters);

    let nonphysical = setup_config.parameters.nonphysical_fields();
    if !nonphysical.is_empty() {
        warn!(
            "Non-physical parameters, output may diverge: {}",
            nonphysical.join(", ")
        );
    }

    // Keep stdout clean for the data when it is the output.
    if !args.quiet && args.output.is_some() {
        setup_config.print();
    }

    let run_params = RunParams::new(args.dt_view, args.format, args.output.clone());

    let result = simulate(&setup_config.parameters);
    info!("Simulated {} samples", result.len());

    let summary = result.summary();
    info!(
        "Peak wheel travel {:.1} mm, peak shock travel {:.1} mm",
        summary.peak_wheel_travel, summary.peak_shock_travel
    );

    match &run_params.output {
        Some(path) => {
            let mut writer = io::BufWriter::new(File::create(path)?);
            write_result(&mut writer, &result, &run_params)?;
            writer.flush()?;
            info!("Wrote results to {}", path.display());
        }
        None => write_result(io::stdout().lock(), &result, &run_params)?,
    }

    info!("Done!");
    Ok(())
}
