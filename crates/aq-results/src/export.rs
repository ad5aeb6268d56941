//! CSV and JSON export.

use std::fmt::Write as _;

use aq_components::StateSample;
use aq_sim::SimRecord;

use crate::types::PlotData;
use crate::{ResultsError, ResultsResult};

/// Render `record` as CSV with one column per title.
///
/// Empty states become empty cells, on/off becomes `1`/`0`.
pub fn to_csv(record: &SimRecord, titles: &[String]) -> ResultsResult<String> {
    if titles.len() != record.component_count() {
        return Err(ResultsError::SeriesMismatch {
            record: record.component_count(),
            expected: titles.len(),
        });
    }

    let mut csv = String::from("time_s");
    for title in titles {
        csv.push(',');
        csv.push_str(title);
    }
    csv.push('\n');

    for (k, t) in record.t_s.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(csv, "{}", t);
        for series in &record.series {
            csv.push(',');
            match series.get(k) {
                Some(StateSample::OnOff(on)) => csv.push(if *on { '1' } else { '0' }),
                Some(StateSample::Volume(v)) => {
                    let _ = write!(csv, "{}", v);
                }
                Some(StateSample::Empty) | None => {}
            }
        }
        csv.push('\n');
    }
    Ok(csv)
}

pub fn to_json(plot: &PlotData) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(plot)?)
}

pub fn from_json(json: &str) -> ResultsResult<PlotData> {
    Ok(serde_json::from_str(json)?)
}
