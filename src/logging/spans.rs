//! Span around a single symmetry scan

use crate::SymmetryResult;
use std::time::Instant;
use tracing::{field, span, span::Entered, Level, Span};
use uuid::Uuid;

pub struct ScanSpan {
    span: Span,
    start_time: Instant,
}

impl ScanSpan {
    pub fn new(scanner: &str, width: usize, height: usize, correlation_id: Option<Uuid>) -> Self {
        let span = span!(
            Level::INFO,
            "symmetry_scan",
            scanner = scanner,
            width = width,
            height = height,
            correlation_id = correlation_id.map(field::display),
            best_axis = field::Empty,
            best_loss = field::Empty,
            execution_time_ms = field::Empty
        );

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn enter(&self) -> Entered<'_> {
        self.span.enter()
    }

    pub fn record_candidate(&self, mid: usize, reach: usize, loss: u64) {
        tracing::trace!(parent: &self.span, mid, reach, loss, "Axis candidate evaluated");
    }

    pub fn record_result(&self, result: &SymmetryResult) {
        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        self.span.record("best_axis", result.axis);
        if let Some(loss) = result.loss {
            self.span.record("best_loss", loss);
        }
        self.span.record("execution_time_ms", elapsed_ms);

        tracing::info!(
            parent: &self.span,
            axis = result.axis,
            loss = ?result.loss,
            candidates = result.candidates_evaluated,
            left_width = result.left.width(),
            execution_time_ms = elapsed_ms,
            "Symmetry scan completed"
        );
    }
}
