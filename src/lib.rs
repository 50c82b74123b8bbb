// Library exports for chartpipe

pub mod aggregate;
pub mod csv_reader;
pub mod data;
pub mod ir;
pub mod parser;
pub mod runtime;

// Public API re-exports
pub use aggregate::{aggregate, EMPTY_LABEL};
pub use data::{Dataset, Row, Scalar};
pub use ir::{ChartExport, ChartSeries, DataPoint};
pub use parser::{parse_chart_request, ChartRequest, ChartType};
pub use runtime::{ChartPreview, CollectSink, PreviewSink};
