use super::matrix::{ImageMatrix, MatrixError};
use image::GrayImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Image file does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Input photo must be square; got {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::Missing(path.to_path_buf()));
    }

    std::fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode raw file contents into 8-bit luma. The format is guessed from
/// the content, so extensionless files decode as well.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage, LoaderError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_luma8())
}

pub fn ensure_square(img: &GrayImage) -> Result<(), LoaderError> {
    let (width, height) = img.dimensions();
    if width != height {
        return Err(LoaderError::NotSquare { width, height });
    }
    Ok(())
}

/// Validate and reshape a decoded image.
pub fn square_matrix(img: &GrayImage) -> Result<ImageMatrix, LoaderError> {
    ensure_square(img)?;
    Ok(ImageMatrix::from_gray_image(img)?)
}

pub fn load_square_matrix<P: AsRef<Path>>(path: P) -> Result<ImageMatrix, LoaderError> {
    let bytes = read_bytes(path)?;
    let img = decode_grayscale(&bytes)?;
    square_matrix(&img)
}
