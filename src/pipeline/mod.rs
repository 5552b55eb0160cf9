pub mod traits;
pub mod types;

pub use traits::*;
pub use types::*;

use crate::algorithms::{ScanStrategy, SymmetryScanner};
use crate::data::loader;
use crate::{ImageMatrix, Result};
use std::path::Path;

/// Read one photo, decode it to a square grayscale matrix and scan it for
/// its vertical mirror axis.
pub struct SymmetryPipeline {
    scanner: Box<dyn SymmetryScanner>,
}

impl SymmetryPipeline {
    pub fn new(strategy: ScanStrategy) -> Self {
        Self::with_scanner(strategy.scanner())
    }

    pub fn with_scanner(scanner: Box<dyn SymmetryScanner>) -> Self {
        Self { scanner }
    }

    pub fn scanner_name(&self) -> &'static str {
        self.scanner.name()
    }

    /// Read and decode `path`, stopping before any scan.
    pub fn load(&self, path: &Path, observer: &mut dyn PipelineObserver) -> Result<(usize, ImageMatrix)> {
        let bytes = loader::read_bytes(path)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Read image file");
        observer.on_bytes(path, &bytes)?;

        let img = loader::decode_grayscale(&bytes)?;
        tracing::debug!(width = img.width(), height = img.height(), "Decoded image");

        let matrix = loader::square_matrix(&img)?;
        observer.on_matrix(&matrix)?;

        Ok((bytes.len(), matrix))
    }

    pub fn run(&self, path: &Path, observer: &mut dyn PipelineObserver) -> Result<PipelineOutput> {
        let (byte_count, matrix) = self.load(path, observer)?;

        let result = self.scanner.scan(&matrix)?;
        observer.on_result(&result)?;

        Ok(PipelineOutput {
            byte_count,
            matrix,
            result,
        })
    }
}
