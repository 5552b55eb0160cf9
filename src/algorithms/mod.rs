pub mod symmetry;

pub use symmetry::*;

use crate::{ImageMatrix, SymmetryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A way of locating the vertical mirror axis of a matrix.
///
/// Every implementation must produce the same axis, loss and left matrix
/// for the same input; they differ only in how the work is carried out.
pub trait SymmetryScanner: Send + Sync {
    fn scan(&self, matrix: &ImageMatrix) -> crate::Result<SymmetryResult>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Explicit loops over offsets and rows
    Naive,
    /// Whole-column elementwise differences
    #[default]
    Vectorized,
    /// Candidate axes spread across the rayon pool
    Parallel,
}

impl ScanStrategy {
    pub const ALL: [ScanStrategy; 3] = [
        ScanStrategy::Naive,
        ScanStrategy::Vectorized,
        ScanStrategy::Parallel,
    ];

    pub fn scanner(self) -> Box<dyn SymmetryScanner> {
        match self {
            ScanStrategy::Naive => Box::new(NaiveScanner),
            ScanStrategy::Vectorized => Box::new(VectorizedScanner),
            ScanStrategy::Parallel => Box::new(ParallelScanner),
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanStrategy::Naive => "naive",
            ScanStrategy::Vectorized => "vectorized",
            ScanStrategy::Parallel => "parallel",
        };
        f.write_str(name)
    }
}
