//! Query helpers for finished runs.

use crate::error::{AppError, AppResult};
use crate::run_service::RunOutput;

/// Summary of a run's time range and data.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub time_range_s: (u32, u32),
    pub sample_count: usize,
    pub component_count: usize,
    pub components: Vec<ComponentSummary>,
}

/// Range of one component's numeric samples. All `None` for stateless
/// components.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSummary {
    pub title: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub last: Option<f64>,
}

/// Get run summary from a finished run.
pub fn get_run_summary(output: &RunOutput) -> AppResult<RunSummary> {
    let record = &output.record;
    let (Some(&t_first), Some(&t_last)) = (record.t_s.first(), record.t_s.last()) else {
        return Err(AppError::InvalidInput("No samples in run".to_string()));
    };

    let components = output
        .titles
        .iter()
        .zip(&record.series)
        .map(|(title, states)| {
            let values: Vec<f64> = states.iter().filter_map(|s| s.value()).collect();
            ComponentSummary {
                title: title.clone(),
                min: values.iter().copied().reduce(f64::min),
                max: values.iter().copied().reduce(f64::max),
                last: states.last().and_then(|s| s.value()),
            }
        })
        .collect();

    Ok(RunSummary {
        time_range_s: (t_first, t_last),
        sample_count: record.len(),
        component_count: record.component_count(),
        components,
    })
}

/// Samples of the series titled `title`, paired with time in minutes.
pub fn extract_series(output: &RunOutput, title: &str) -> AppResult<Vec<(f64, Option<f64>)>> {
    let index = output
        .titles
        .iter()
        .position(|t| t == title)
        .ok_or_else(|| AppError::SeriesNotFound(title.to_string()))?;
    let states = output
        .record
        .series
        .get(index)
        .ok_or_else(|| AppError::SeriesNotFound(title.to_string()))?;

    Ok(output
        .record
        .t_min()
        .into_iter()
        .zip(states.iter().map(|s| s.value()))
        .collect())
}
