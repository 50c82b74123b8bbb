// Request model for the chart preview pipeline

use serde::{Deserialize, Serialize};

/// Supported chart shapes. Serialized with lowercase names to match the
/// export payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[serde(rename = "pie")]
    #[default]
    Pie,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "histogram")]
    Histogram,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "scatter")]
    Scatter,
}

/// The column selections driving one preview recompute.
///
/// An empty `category_column` means nothing is selected yet. `Some("")` in
/// the optional fields means the same as `None`; the accessor methods fold
/// the two together so callers never have to distinguish them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartRequest {
    pub chart_type: ChartType,
    pub category_column: String,
    pub value_column: Option<String>,
    pub filter_column: Option<String>,
    pub filter_value: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ChartRequest {
    /// Selected category column, if any.
    pub fn category(&self) -> Option<&str> {
        if self.category_column.is_empty() {
            None
        } else {
            Some(&self.category_column)
        }
    }

    /// Selected value column, if any.
    pub fn value(&self) -> Option<&str> {
        non_empty(&self.value_column)
    }

    /// Active filter, if any. A filter only applies when both the column and
    /// the value are non-empty.
    pub fn filter(&self) -> Option<(&str, &str)> {
        match (non_empty(&self.filter_column), non_empty(&self.filter_value)) {
            (Some(col), Some(val)) => Some((col, val)),
            _ => None,
        }
    }
}
