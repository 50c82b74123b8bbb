// Preview runtime: wires dataset + request changes through the Aggregator
// and pushes the result out over explicit ports.

use crate::aggregate::aggregate;
use crate::data::Dataset;
use crate::ir::ChartExport;
use crate::parser::ast::ChartRequest;

/// Output ports of the preview pipeline. The export port fires exactly once
/// per input change; the reset port fires when selections are cleared.
pub trait PreviewSink {
    /// Receives the fresh export payload after a recompute, or None when
    /// there is nothing to export (empty series or no category selected).
    /// A None clears any stale export held downstream.
    fn on_export(&mut self, export: Option<ChartExport>);

    /// Selections were reset; consumers drop derived/export state.
    fn on_reset(&mut self) {}
}

/// Holds the current inputs and recomputes the chart series whenever one of
/// them changes. Synchronous and single-threaded; the series is rebuilt from
/// scratch on every change, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct ChartPreview {
    dataset: Dataset,
    request: ChartRequest,
}

impl ChartPreview {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            request: ChartRequest::default(),
        }
    }

    pub fn request(&self) -> &ChartRequest {
        &self.request
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Replace the request and publish the recomputed series.
    pub fn set_request(&mut self, request: ChartRequest, sink: &mut dyn PreviewSink) {
        self.request = request;
        self.publish(sink);
    }

    /// Replace the dataset and publish the recomputed series.
    pub fn set_dataset(&mut self, dataset: Dataset, sink: &mut dyn PreviewSink) {
        self.dataset = dataset;
        self.publish(sink);
    }

    /// Clear all selections. Notifies the reset port first, then publishes
    /// once (necessarily None) so downstream drops its stale export.
    pub fn reset(&mut self, sink: &mut dyn PreviewSink) {
        self.request = ChartRequest::default();
        sink.on_reset();
        self.publish(sink);
    }

    /// Recompute without changing inputs. Identical inputs produce an
    /// identical payload.
    pub fn refresh(&self, sink: &mut dyn PreviewSink) {
        self.publish(sink);
    }

    fn publish(&self, sink: &mut dyn PreviewSink) {
        let series = aggregate(&self.dataset, &self.request);
        if self.request.category().is_none() || series.is_empty() {
            sink.on_export(None);
        } else {
            sink.on_export(Some(ChartExport::new(&self.request, series)));
        }
    }
}

/// Sink that keeps the most recent notifications. Used by the CLI and tests.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub last_export: Option<ChartExport>,
    pub export_count: usize,
    pub reset_count: usize,
}

impl PreviewSink for CollectSink {
    fn on_export(&mut self, export: Option<ChartExport>) {
        self.last_export = export;
        self.export_count += 1;
    }

    fn on_reset(&mut self) {
        self.reset_count += 1;
    }
}
