use anyhow::{anyhow, Result};
use serde_json::Value;

/// A single table cell. CSV input always produces `Text` (an empty cell is
/// `Text("")`); JSON input preserves numbers and nulls.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Null,
}

impl Scalar {
    /// Null or the exactly-empty string. Whitespace-only text is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.is_empty(),
            Scalar::Number(_) => false,
        }
    }

    /// Render as a trimmed display string. Numbers format the way they
    /// serialize (3.0 -> "3", 12.5 -> "12.5").
    pub fn to_display(&self) -> String {
        match self {
            Scalar::Text(s) => s.trim().to_string(),
            Scalar::Number(n) => format!("{}", n),
            Scalar::Null => String::new(),
        }
    }

    /// Numeric coercion: locale-independent float parse of the trimmed text.
    /// Null and empty text are never coercible; non-finite results count as
    /// failed parses.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_finite() => Some(*n),
            Scalar::Number(_) => None,
            Scalar::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            Scalar::Null => None,
        }
    }
}

/// A borrowed view of one record, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [Scalar],
}

impl<'a> Row<'a> {
    /// Look up a cell by column name (ASCII-case-insensitive).
    /// Returns None when the column does not exist or the record is short,
    /// keeping "missing" distinct from an explicit `Scalar::Null`.
    pub fn get(&self, column: &str) -> Option<&'a Scalar> {
        let idx = self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))?;
        self.cells.get(idx)
    }
}

/// Tabular input to the aggregation pipeline: headers plus a full row set
/// and an optional bounded preview subset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Scalar>>,
    pub preview_rows: Vec<Vec<Scalar>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Scalar>>) -> Self {
        Self {
            headers,
            rows,
            preview_rows: Vec::new(),
        }
    }

    pub fn with_preview(mut self, preview_rows: Vec<Vec<Scalar>>) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    /// Create a Dataset from a JSON array of objects. Headers come from the
    /// first object; booleans are stringified, missing keys become null.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        if array.is_empty() {
            return Err(anyhow!("Input data array is empty"));
        }

        let first_obj = array[0]
            .as_object()
            .ok_or_else(|| anyhow!("Items in array must be objects"))?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::new();
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;

            let mut row = Vec::new();
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(Value::String(s)) => Scalar::Text(s.clone()),
                    Some(Value::Number(n)) => match n.as_f64() {
                        Some(f) => Scalar::Number(f),
                        None => Scalar::Text(n.to_string()),
                    },
                    Some(Value::Bool(b)) => Scalar::Text(b.to_string()),
                    Some(Value::Null) | None => Scalar::Null,
                    _ => return Err(anyhow!("Unsupported value type for field '{}'", header)),
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self::new(headers, rows))
    }

    /// Rows the Aggregator works on: the full set when non-empty, else the
    /// preview subset, else nothing.
    pub fn source_rows(&self) -> impl Iterator<Item = Row<'_>> {
        let records = if !self.rows.is_empty() {
            &self.rows
        } else {
            &self.preview_rows
        };
        records.iter().map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }
}
