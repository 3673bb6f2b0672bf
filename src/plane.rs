//! Single-channel byte planes.
//!
//! Storage is row-major (`data[y * width + x]`). Nested grids handed to
//! [`Plane::from_grid`] are x-major (`grid[x][y]`), the same convention the
//! kernel uses, so `width = grid.len()` and `height = grid[0].len()`.
use crate::error::{Error, Result};
use crate::image::ImageView;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel role of a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Grayscale,
}

impl Channel {
    /// Decoder output order.
    pub const RGBA: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    role: Channel,
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Plane {
    /// Zero-filled plane of size `width × height`.
    pub fn new(role: Channel, width: usize, height: usize) -> Result<Self> {
        check_dims(width, height)?;
        Ok(Self {
            role,
            width,
            height,
            data: vec![0; width * height],
        })
    }

    /// Plane from a row-major buffer of exactly `width * height` bytes.
    pub fn from_raw(role: Channel, width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        check_dims(width, height)?;
        if data.len() != width * height {
            return Err(Error::InvalidShape(format!(
                "buffer of {} bytes does not match {width}x{height} plane",
                data.len()
            )));
        }
        Ok(Self {
            role,
            width,
            height,
            data,
        })
    }

    /// Plane from an x-major grid, `grid[x][y]`.
    pub fn from_grid(role: Channel, grid: Vec<Vec<u8>>) -> Result<Self> {
        let width = grid.len();
        let height = grid.first().map_or(0, Vec::len);
        check_dims(width, height)?;
        if let Some(x) = grid.iter().position(|column| column.len() != height) {
            return Err(Error::InvalidShape(format!(
                "grid column {x} has {} pixels, expected {height}",
                grid[x].len()
            )));
        }
        let mut data = vec![0; width * height];
        for (x, column) in grid.iter().enumerate() {
            for (y, &value) in column.iter().enumerate() {
                data[y * width + x] = value;
            }
        }
        Ok(Self {
            role,
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn role(&self) -> Channel {
        self.role
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn at(&self, x: usize, y: usize) -> Result<u8> {
        self.check_bounds(x, y)?;
        Ok(self.get(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<()> {
        self.check_bounds(x, y)?;
        self.data[y * self.width + x] = value;
        Ok(())
    }

    /// Unchecked read for callers that already hold `x < width, y < height`.
    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Same role and dimensions, new row-major content.
    pub(crate) fn replaced(&self, data: Vec<u8>) -> Plane {
        debug_assert_eq!(data.len(), self.data.len());
        Plane {
            role: self.role,
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_range(
                "pixel",
                (x, y),
                (self.width, self.height),
            ));
        }
        Ok(())
    }
}

impl ImageView for Plane {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

fn check_dims(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidShape(format!(
            "plane dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}
