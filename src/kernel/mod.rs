//! Square convolution masks.
//!
//! A [`Kernel`] is an odd-sized `size × size` weight matrix plus a
//! post-division `factor` carried as metadata. The convolution engine reads
//! `weights` only; the factor is never multiplied into a sum unless the caller
//! opts in through [`Kernel::baked`].
//!
//! Cell `(kx, ky)` of the mask pairs with the source pixel at offset
//! `(kx - d, ky - d)` from the target, `d` being the displacement. Nested grids
//! are x-major (`grid[kx][ky]`); flat sequences fill row by row, so element `i`
//! lands at `(i / size, i % size)`.
pub mod presets;

pub use self::presets::Preset;

use crate::error::{Error, Result};
use nalgebra::DMatrix;

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: DMatrix<f32>,
    apply_factor: bool,
    factor: f32,
}

impl Kernel {
    /// Build a kernel from `size * size` weights laid out row by row.
    pub fn from_slice(weights: &[f32]) -> Result<Self> {
        let size = odd_square_root(weights.len())?;
        Self::from_matrix(DMatrix::from_row_slice(size, size, weights))
    }

    /// Build a kernel from an x-major nested grid.
    pub fn from_grid(grid: Vec<Vec<f32>>) -> Result<Self> {
        let size = grid.len();
        if let Some(bad) = grid.iter().position(|row| row.len() != size) {
            return Err(Error::InvalidShape(format!(
                "kernel grid row {bad} has {} weights, expected {size}",
                grid[bad].len()
            )));
        }
        let flat: Vec<f32> = grid.into_iter().flatten().collect();
        Self::from_matrix(DMatrix::from_row_slice(size, size, &flat))
    }

    pub fn from_matrix(weights: DMatrix<f32>) -> Result<Self> {
        let (rows, cols) = weights.shape();
        if rows != cols {
            return Err(Error::InvalidShape(format!(
                "kernel must be square, got {rows}x{cols}"
            )));
        }
        if rows == 0 || rows % 2 == 0 {
            return Err(Error::InvalidShape(format!(
                "kernel size must be odd and positive, got {rows}"
            )));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(Error::InvalidShape(
                "kernel weights must be finite".to_string(),
            ));
        }
        // Largest possible |sum| over byte pixels must stay representable.
        let reach: f32 = weights.iter().map(|w| w.abs()).sum();
        if !(reach * 255.0).is_finite() {
            return Err(Error::InvalidShape(format!(
                "kernel weights too large: 255 * sum(|w|) overflows f32 (sum(|w|) = {reach})"
            )));
        }
        Ok(Self {
            weights,
            apply_factor: true,
            factor: 1.0,
        })
    }

    /// 1×1 kernel with weight `1`.
    pub fn identity() -> Self {
        Self {
            weights: DMatrix::from_element(1, 1, 1.0),
            apply_factor: true,
            factor: 1.0,
        }
    }

    pub fn with_factor(mut self, factor: f32) -> Self {
        self.apply_factor = true;
        self.factor = factor;
        self
    }

    pub fn without_factor(mut self) -> Self {
        self.apply_factor = false;
        self
    }

    /// Copy with `factor` multiplied into every weight; the result carries
    /// `factor = 1` and `apply_factor = false`. Fails like [`Kernel::from_matrix`]
    /// when the scaled weights leave the representable range.
    pub fn baked(&self) -> Result<Self> {
        let scale = if self.apply_factor { self.factor } else { 1.0 };
        Self::from_matrix(self.weights.map(|w| w * scale)).map(Kernel::without_factor)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Half-width `(size - 1) / 2`, the offset of the anchor cell.
    #[inline]
    pub fn displacement(&self) -> usize {
        (self.size() - 1) / 2
    }

    #[inline]
    pub fn center(&self) -> f32 {
        let d = self.displacement();
        self.weights[(d, d)]
    }

    pub fn at(&self, row: usize, col: usize) -> Result<f32> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(Error::out_of_range("kernel", (row, col), (size, size)));
        }
        Ok(self.weights[(row, col)])
    }

    /// Unchecked weight lookup for the hot loop; callers stay within `size`.
    #[inline]
    pub(crate) fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.weights[(kx, ky)]
    }

    pub fn weights(&self) -> &DMatrix<f32> {
        &self.weights
    }

    pub fn apply_factor(&self) -> bool {
        self.apply_factor
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

fn odd_square_root(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(Error::InvalidShape("kernel has no weights".to_string()));
    }
    let root = (len as f64).sqrt().round() as usize;
    if root * root != len {
        return Err(Error::InvalidShape(format!(
            "{len} weights do not form a square kernel"
        )));
    }
    if root % 2 == 0 {
        return Err(Error::InvalidShape(format!(
            "{len} weights form an even {root}x{root} kernel"
        )));
    }
    Ok(root)
}
