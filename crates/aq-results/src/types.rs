//! Result data types.

use aq_core::ComponentId;
use serde::{Deserialize, Serialize};

/// Axis label shared by every group.
pub const TIME_AXIS_LABEL: &str = "Time (min)";
pub const CONTAINER_AXIS_LABEL: &str = "Contents (L)";
pub const PUMP_AXIS_LABEL: &str = "State (on/off)";

/// One line in a plot: a component's samples plus its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesItem {
    /// Chain position the samples came from
    pub id: ComponentId,
    pub title: String,
    pub kind: String,
    /// `None` where the component has no state
    pub values: Vec<Option<f64>>,
    pub params: Vec<ParamEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamEntry {
    pub name: String,
    pub value: String,
}

/// Items sharing one y-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub x_title: String,
    pub y_title: String,
    pub x_values: Vec<f64>,
    pub items: Vec<SeriesItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub groups: Vec<SeriesGroup>,
    pub description: String,
}

impl PlotData {
    pub fn group(&self, y_title: &str) -> Option<&SeriesGroup> {
        self.groups.iter().find(|g| g.y_title == y_title)
    }

    /// Every item across all groups, in group order.
    pub fn items(&self) -> impl Iterator<Item = &SeriesItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}
