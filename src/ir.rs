use serde::Serialize;

use crate::parser::ast::{ChartRequest, ChartType};

// =============================================================================
// Aggregation output
// =============================================================================

/// One aggregated chart point. `value` is always finite; rows that cannot
/// produce a finite number are dropped or counted upstream, never emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

/// The ordered series produced by one aggregation pass. Rebuilt from scratch
/// on every input change, never mutated in place.
pub type ChartSeries = Vec<DataPoint>;

// =============================================================================
// Export payload
// =============================================================================

/// Payload handed to the export consumer after a recompute. Downstream
/// rendering/export owns turning this into visuals or files.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartExport {
    pub chart_type: ChartType,
    pub chart_data: ChartSeries,
    pub category_column: String,
    pub value_column: Option<String>,
    pub filter_column: Option<String>,
    pub filter_value: Option<String>,
}

impl ChartExport {
    pub fn new(request: &ChartRequest, chart_data: ChartSeries) -> Self {
        Self {
            chart_type: request.chart_type,
            chart_data,
            category_column: request.category_column.clone(),
            value_column: request.value_column.clone(),
            filter_column: request.filter_column.clone(),
            filter_value: request.filter_value.clone(),
        }
    }
}
