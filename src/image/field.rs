//! Owned `f32` field holding the raw convolution sums of one plane.
//!
//! Row-major with no padding (`data[y * width + x]`). Sums are kept unclamped
//! until normalization turns the whole field into bytes.
use super::traits::ImageView;

#[derive(Clone, Debug)]
pub struct SumField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl SumField {
    /// Zero-initialized field of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl ImageView for SumField {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
