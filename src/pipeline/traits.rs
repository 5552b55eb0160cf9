use crate::{ImageMatrix, Result, SymmetryResult};
use std::path::Path;

/// Hooks invoked as each pipeline step completes.
///
/// A step's hook runs before the next step starts, so whatever an observer
/// emits for earlier steps is already out when a later step fails.
pub trait PipelineObserver {
    fn on_bytes(&mut self, _source: &Path, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }

    fn on_matrix(&mut self, _matrix: &ImageMatrix) -> Result<()> {
        Ok(())
    }

    fn on_result(&mut self, _result: &SymmetryResult) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every step
pub struct SilentObserver;

impl PipelineObserver for SilentObserver {}
