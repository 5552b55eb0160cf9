use image::GrayImage;
use ndarray::{s, Array2, ArrayView1, ArrayView2};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Pixel buffer holds {len} values, expected {width}x{height}")]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// Row-major grid of 8-bit intensities.
///
/// Every row has the same length. Squareness is not enforced here; the
/// loader checks it for decoded photos while the scanner accepts any
/// rectangular grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageMatrix {
    data: Array2<u8>,
}

impl ImageMatrix {
    pub fn from_array(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Build from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            flat.extend_from_slice(values);
        }

        Self::from_flat(width, height, flat)
    }

    pub fn from_flat(width: usize, height: usize, flat: Vec<u8>) -> Result<Self, MatrixError> {
        let len = flat.len();
        Array2::from_shape_vec((height, width), flat)
            .map(Self::from_array)
            .map_err(|_| MatrixError::BufferSize { width, height, len })
    }

    /// Reshape a decoded luma image into a `height x width` matrix.
    pub fn from_gray_image(image: &GrayImage) -> Result<Self, MatrixError> {
        let (width, height) = image.dimensions();
        Self::from_flat(width as usize, height as usize, image.as_raw().clone())
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// True when there is no pixel at all (no rows or zero-width rows).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.data.get((row, col)).copied()
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    pub fn column(&self, col: usize) -> ArrayView1<'_, u8> {
        self.data.column(col)
    }

    /// All rows restricted to columns `[0, cols)`.
    pub fn crop_left(&self, cols: usize) -> ImageMatrix {
        let cols = cols.min(self.width());
        Self::from_array(self.data.slice(s![.., ..cols]).to_owned())
    }

    /// Top-left `size x size` block, clipped to the matrix bounds.
    pub fn top_left(&self, size: usize) -> Vec<Vec<u8>> {
        let rows = size.min(self.height());
        let cols = size.min(self.width());
        self.data
            .slice(s![..rows, ..cols])
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
