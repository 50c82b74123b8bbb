use std::cmp::Ordering;
use std::collections::HashMap;

use crate::data::{Dataset, Row, Scalar};
use crate::ir::{ChartSeries, DataPoint};
use crate::parser::ast::{ChartRequest, ChartType};

/// Label standing in for null, missing, and empty cells. Also usable as a
/// filter value to select exactly those rows.
pub const EMPTY_LABEL: &str = "Empty/Null";

/// Maximum number of histogram bins.
const MAX_BINS: usize = 10;

/// Main entry point: aggregate the dataset into a chart-ready series.
///
/// Never fails. Missing columns, non-numeric cells, and empty inputs all
/// degrade to an empty series (or to count-of-1 fallbacks for pie/bar);
/// emitted values are always finite.
pub fn aggregate(dataset: &Dataset, request: &ChartRequest) -> ChartSeries {
    let category = match request.category() {
        Some(c) => c,
        None => return Vec::new(),
    };

    let rows = filtered_rows(dataset, request);
    if rows.is_empty() {
        return Vec::new();
    }

    match request.chart_type {
        ChartType::Pie => aggregate_pie(&rows, category),
        ChartType::Bar => aggregate_bar(&rows, category, request.value()),
        ChartType::Histogram => aggregate_histogram(&rows, category),
        ChartType::Line => match request.value() {
            Some(value) => sort_line_points(collect_points(&rows, category, value)),
            None => Vec::new(),
        },
        ChartType::Scatter => match request.value() {
            Some(value) => collect_points(&rows, category, value),
            None => Vec::new(),
        },
    }
}

/// Normalize a cell for grouping and filter comparison: null/missing/empty
/// becomes the sentinel label, everything else its trimmed string form.
fn normalize_value(cell: Option<&Scalar>) -> String {
    match cell {
        Some(s) if !s.is_blank() => s.to_display(),
        _ => EMPTY_LABEL.to_string(),
    }
}

/// Select source rows and apply the request filter, if one is active.
fn filtered_rows<'a>(dataset: &'a Dataset, request: &ChartRequest) -> Vec<Row<'a>> {
    let rows = dataset.source_rows();
    match request.filter() {
        Some((column, value)) => rows
            .filter(|row| normalize_value(row.get(column)) == value)
            .collect(),
        None => rows.collect(),
    }
}

/// pie: frequency count per distinct normalized category value
fn aggregate_pie(rows: &[Row<'_>], category: &str) -> ChartSeries {
    let mut counts: HashMap<String, f64> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for row in rows {
        let label = normalize_value(row.get(category));
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0.0) += 1.0;
    }

    let mut series: ChartSeries = order
        .into_iter()
        .map(|name| {
            let value = counts[&name];
            DataPoint { name, value }
        })
        .collect();
    sort_descending(&mut series);
    series
}

/// bar: per-group sum of the coerced value column, falling back to a count
/// contribution of 1 for rows without a usable number
fn aggregate_bar(rows: &[Row<'_>], category: &str, value_column: Option<&str>) -> ChartSeries {
    let mut totals: HashMap<String, f64> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for row in rows {
        let label = normalize_value(row.get(category));
        if !totals.contains_key(&label) {
            order.push(label.clone());
        }
        let contribution = value_column
            .and_then(|col| row.get(col))
            .and_then(Scalar::as_number)
            .unwrap_or(1.0);
        *totals.entry(label).or_insert(0.0) += contribution;
    }

    let mut series: ChartSeries = order
        .into_iter()
        .map(|name| {
            let value = round2(totals[&name]);
            DataPoint { name, value }
        })
        .collect();
    sort_descending(&mut series);
    series
}

/// histogram: bin the numeric-coercible category values into
/// min(10, ceil(sqrt(n))) contiguous half-open bins
fn aggregate_histogram(rows: &[Row<'_>], category: &str) -> ChartSeries {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get(category).and_then(Scalar::as_number))
        .collect();

    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let bin_count = ((values.len() as f64).sqrt().ceil() as usize).min(MAX_BINS);
    let bin_size = (max - min) / bin_count as f64;

    // Pre-seed every bin so zero-count bins still show up
    let mut bins = vec![0.0; bin_count];
    for &v in &values {
        // The maximum value clamps into the last bin
        let idx = if bin_size > 0.0 {
            (((v - min) / bin_size).floor() as usize).min(bin_count - 1)
        } else {
            0
        };
        bins[idx] += 1.0;
    }

    bins.iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = min + i as f64 * bin_size;
            let name = if i + 1 == bin_count {
                format!("{:.2}+", start)
            } else {
                format!("{:.2} - {:.2}", start, start + bin_size)
            };
            DataPoint { name, value: count }
        })
        .collect()
}

/// line/scatter row extraction: both columns present and non-blank, value
/// numeric-coercible; everything else is dropped
fn collect_points(rows: &[Row<'_>], category: &str, value_column: &str) -> ChartSeries {
    rows.iter()
        .filter_map(|row| {
            let cat = row.get(category).filter(|c| !c.is_blank())?;
            let value = row
                .get(value_column)
                .filter(|v| !v.is_blank())?
                .as_number()?;
            Some(DataPoint {
                name: cat.to_display(),
                value,
            })
        })
        .collect()
}

/// Line ordering: numeric ascending when BOTH names parse as numbers, else
/// lexicographic. Mixed label sets get a non-total ordering on purpose;
/// downstream consumers rely on this exact tie-break.
fn sort_line_points(mut series: ChartSeries) -> ChartSeries {
    series.sort_by(|a, b| match (a.name.parse::<f64>(), b.name.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.name.cmp(&b.name),
    });
    series
}

/// Descending by value; ties keep first-appearance order (stable sort)
fn sort_descending(series: &mut ChartSeries) {
    series.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
