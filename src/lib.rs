pub mod algorithms;
pub mod config;
pub mod data;
pub mod logging;
pub mod pipeline;
pub mod visualization;

pub use algorithms::*;
pub use data::*;
pub use pipeline::*;

/// Outcome of one symmetry scan.
#[derive(Debug, Clone)]
pub struct SymmetryResult {
    /// Column chosen as the mirror axis
    pub axis: usize,
    /// Loss at `axis`; `None` when no column had a mirror pair
    pub loss: Option<u64>,
    /// All rows restricted to columns `[0, axis)`
    pub left: ImageMatrix,
    pub candidates_evaluated: usize,
    pub processing_time_ms: f32,
    pub scanner_used: String,
}

impl SymmetryResult {
    pub fn new(scanner: &str) -> Self {
        Self {
            axis: 0,
            loss: None,
            left: ImageMatrix::default(),
            candidates_evaluated: 0,
            processing_time_ms: 0.0,
            scanner_used: scanner.to_string(),
        }
    }

    /// Whether two scans agree on everything except timing and scanner name.
    pub fn same_outcome(&self, other: &SymmetryResult) -> bool {
        self.axis == other.axis
            && self.loss == other.loss
            && self.left == other.left
            && self.candidates_evaluated == other.candidates_evaluated
    }
}

pub type Result<T> = anyhow::Result<T>;
