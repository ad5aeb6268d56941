//! Run execution and export.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use aq_chain::Chain;
use aq_results::PlotData;
use aq_sim::{SimOptions, SimProgress, SimRecord};

use crate::error::{AppError, AppResult};

/// Everything a front end needs after a run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub record: SimRecord,
    pub plot: PlotData,
    /// Series title per chain position
    pub titles: Vec<String>,
    pub elapsed_wall_s: f64,
}

/// Export formats for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidInput(format!(
                "unknown export format '{}'",
                other
            ))),
        }
    }
}

/// Run `chain` and package the result.
pub fn run(chain: &mut Chain, opts: &SimOptions) -> AppResult<RunOutput> {
    run_with_progress(chain, opts, |_| {})
}

pub fn run_with_progress<F>(
    chain: &mut Chain,
    opts: &SimOptions,
    on_progress: F,
) -> AppResult<RunOutput>
where
    F: FnMut(SimProgress),
{
    tracing::info!(
        components = chain.len(),
        time_step_s = opts.time_step_s,
        duration_h = opts.duration_h,
        "running model"
    );
    let start = Instant::now();

    let record = aq_sim::run_with_progress(chain, opts, on_progress)?;
    let plot = aq_results::package(chain, &record)?;
    let titles = aq_results::series_titles(chain);

    let elapsed_wall_s = start.elapsed().as_secs_f64();
    tracing::info!(samples = record.len(), elapsed_wall_s, "model run complete");

    Ok(RunOutput {
        record,
        plot,
        titles,
        elapsed_wall_s,
    })
}

/// Render a finished run in `format`.
pub fn export(output: &RunOutput, format: ExportFormat) -> AppResult<String> {
    let text = match format {
        ExportFormat::Csv => aq_results::to_csv(&output.record, &output.titles)?,
        ExportFormat::Json => aq_results::to_json(&output.plot)?,
    };
    Ok(text)
}
