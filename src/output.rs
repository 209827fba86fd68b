use std::{error::Error, io::Write};

use crate::config::run::RunParams;
use crate::state::{ResultSummary, SimulationResult, WheelRates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

const CSV_HEADER: [&str; 5] = [
    "time_s",
    "sprung_pos_m",
    "unsprung_pos_m",
    "shock_travel_mm",
    "wheel_travel_mm",
];

#[derive(serde::Serialize)]
struct SampleRow {
    time_s: f64,
    sprung_pos_m: f64,
    unsprung_pos_m: f64,
    shock_travel_mm: f64,
    wheel_travel_mm: f64,
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    wheel_rates: &'a WheelRates,
    summary: ResultSummary,
    time: Vec<f64>,
    sprung_pos: Vec<f64>,
    unsprung_pos: Vec<f64>,
    shock_travel: Vec<f64>,
    wheel_travel: Vec<f64>,
}

fn every_nth(xs: &[f64], dstep: usize) -> Vec<f64> {
    xs.iter().step_by(dstep.max(1)).copied().collect()
}

/// Writes one row per emitted sample, preceded by a header row.
pub fn write_csv<W: Write>(
    writer: W,
    result: &SimulationResult,
    dstep: usize,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // Written by hand so an empty run still gets a header.
    wtr.write_record(CSV_HEADER)?;
    for i in (0..result.len()).step_by(dstep.max(1)) {
        wtr.serialize(SampleRow {
            time_s: result.time[i],
            sprung_pos_m: result.sprung_pos[i],
            unsprung_pos_m: result.unsprung_pos[i],
            shock_travel_mm: result.shock_travel[i],
            wheel_travel_mm: result.wheel_travel[i],
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the series, wheel rates and peak summary as one JSON object.
/// The summary always covers the full run, not just the emitted samples.
pub fn write_json<W: Write>(
    writer: W,
    result: &SimulationResult,
    dstep: usize,
) -> Result<(), Box<dyn Error>> {
    let out = JsonOutput {
        wheel_rates: &result.wheel_rates,
        summary: result.summary(),
        time: every_nth(&result.time, dstep),
        sprung_pos: every_nth(&result.sprung_pos, dstep),
        unsprung_pos: every_nth(&result.unsprung_pos, dstep),
        shock_travel: every_nth(&result.shock_travel, dstep),
        wheel_travel: every_nth(&result.wheel_travel, dstep),
    };
    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

pub fn write_result<W: Write>(
    writer: W,
    result: &SimulationResult,
    run_params: &RunParams,
) -> Result<(), Box<dyn Error>> {
    match run_params.format {
        OutputFormat::Csv => write_csv(writer, result, run_params.dstep_view),
        OutputFormat::Json => write_json(writer, result, run_params.dstep_view),
    }
}
