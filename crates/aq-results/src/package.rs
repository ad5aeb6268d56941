//! Grouping of a finished run into plot-ready series.

use aq_chain::Chain;
use aq_components::{FlowComponent, ParamValue};
use aq_sim::SimRecord;

use crate::labels::series_titles;
use crate::types::{
    CONTAINER_AXIS_LABEL, PUMP_AXIS_LABEL, ParamEntry, PlotData, SeriesGroup, SeriesItem,
    TIME_AXIS_LABEL,
};
use crate::{ResultsError, ResultsResult};

/// Package `record` from a run of `chain`.
///
/// Containers go in the "Contents (L)" group and pumps in "State (on/off)".
/// Water sources appear only in the description.
pub fn package(chain: &Chain, record: &SimRecord) -> ResultsResult<PlotData> {
    if record.component_count() != chain.len() {
        return Err(ResultsError::SeriesMismatch {
            record: record.component_count(),
            expected: chain.len(),
        });
    }

    let titles = series_titles(chain);
    let x_values = record.t_min();
    let mut containers = group(CONTAINER_AXIS_LABEL, &x_values);
    let mut pumps = group(PUMP_AXIS_LABEL, &x_values);

    for ((id, component), title) in chain.iter().zip(&titles) {
        let params = component
            .params()
            .into_iter()
            .map(|(name, value)| ParamEntry {
                name: name.to_string(),
                value: match value {
                    ParamValue::Component(prev) => titles
                        .get(prev.as_usize())
                        .cloned()
                        .unwrap_or_else(|| prev.to_string()),
                    other => other.to_string(),
                },
            })
            .collect();

        let item = SeriesItem {
            id,
            title: title.clone(),
            kind: component.kind().to_string(),
            values: record.values(id).unwrap_or_default(),
            params,
        };

        let kind = component.kind();
        if kind.is_container() {
            containers.items.push(item);
        } else if kind.is_pump() {
            pumps.items.push(item);
        }
    }

    Ok(PlotData {
        groups: vec![containers, pumps],
        description: format!("Model components: {}", titles.join(", ")),
    })
}

fn group(y_title: &str, x_values: &[f64]) -> SeriesGroup {
    SeriesGroup {
        x_title: TIME_AXIS_LABEL.to_string(),
        y_title: y_title.to_string(),
        x_values: x_values.to_vec(),
        items: Vec::new(),
    }
}
