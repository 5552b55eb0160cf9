use crate::{ImageMatrix, SymmetryResult};

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub byte_count: usize,
    pub matrix: ImageMatrix,
    pub result: SymmetryResult,
}
