use std::path::PathBuf;

use crate::config::setup::parameters::simulation::to_steps;
use crate::output::OutputFormat;

pub struct RunParams {
    // Emit every `dstep_view`-th sample.
    pub dstep_view: usize,
    pub format: OutputFormat,
    // Standard output when unset.
    pub output: Option<PathBuf>,
}

impl RunParams {
    /// Output settings with samples spaced at least `dt_view` seconds apart.
    pub fn new(dt_view: Option<f64>, format: OutputFormat, output: Option<PathBuf>) -> Self {
        RunParams {
            dstep_view: dt_view.map_or(1, to_steps).max(1),
            format,
            output,
        }
    }
}
