//! Multi-plane images.
use crate::convolve::{ConvolutionEngine, Normalization};
use crate::error::{Error, Result};
use crate::image::{io, ImageView};
use crate::kernel::Kernel;
use crate::plane::Plane;

use std::path::Path;

/// Ordered planes sharing one width and height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    planes: Vec<Plane>,
}

impl Raster {
    /// Assemble a raster; fails on an empty list or mismatched plane sizes.
    pub fn new(planes: Vec<Plane>) -> Result<Self> {
        let first = planes.first().ok_or_else(|| {
            Error::InconsistentPlaneShape("raster needs at least one plane".to_string())
        })?;
        let dims = first.dims();
        if let Some((i, plane)) = planes
            .iter()
            .enumerate()
            .find(|(_, plane)| plane.dims() != dims)
        {
            return Err(Error::InconsistentPlaneShape(format!(
                "plane {i} ({}) is {}x{}, expected {}x{}",
                plane.role(),
                plane.width(),
                plane.height(),
                dims.0,
                dims.1
            )));
        }
        Ok(Self { planes })
    }

    /// Caller guarantees a non-empty list of equally sized planes.
    pub(crate) fn from_planes_unchecked(planes: Vec<Plane>) -> Self {
        debug_assert!(!planes.is_empty());
        Self { planes }
    }

    /// Decode `path` into red, green, blue and alpha planes.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let planes = io::load_rgba_planes(path.as_ref())?;
        Ok(Self::from_planes_unchecked(planes.into()))
    }

    /// Decode `path` into a single grayscale plane.
    pub fn open_grayscale(path: impl AsRef<Path>) -> Result<Self> {
        let plane = io::load_grayscale_plane(path.as_ref())?;
        Ok(Self::from_planes_unchecked(vec![plane]))
    }

    /// Encode to `path`. Three or more planes are written as RGB from the
    /// first three (alpha is dropped); fewer are written as grayscale from the
    /// first plane.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match self.planes.as_slice() {
            [r, g, b, ..] => io::save_rgb(path, r, g, b),
            [gray, ..] => io::save_grayscale(path, gray),
            [] => unreachable!("raster always holds at least one plane"),
        }
    }

    pub fn width(&self) -> usize {
        self.planes[0].width()
    }

    pub fn height(&self) -> usize {
        self.planes[0].height()
    }

    /// Number of planes.
    pub fn depth(&self) -> usize {
        self.planes.len()
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> Result<&Plane> {
        self.planes
            .get(index)
            .ok_or_else(|| Error::out_of_range("plane", (index, 0), (self.depth(), 1)))
    }

    pub fn into_planes(self) -> Vec<Plane> {
        self.planes
    }

    pub fn at(&self, x: usize, y: usize, plane: usize) -> Result<u8> {
        self.plane(plane)?.at(x, y)
    }

    /// Convolve with the default engine and return the result; `self` is
    /// left untouched.
    pub fn apply(&self, kernel: &Kernel, mode: Normalization) -> Raster {
        ConvolutionEngine::default().apply(self, kernel, mode)
    }

    /// Replace this raster's planes with the convolution result. The swap
    /// happens only after every plane has been computed.
    pub fn apply_in_place(&mut self, kernel: &Kernel, mode: Normalization) {
        let result = self.apply(kernel, mode);
        self.planes = result.planes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::Channel;

    #[test]
    fn rejects_empty_and_mismatched_planes() {
        assert!(matches!(
            Raster::new(Vec::new()),
            Err(Error::InconsistentPlaneShape(_))
        ));
        let planes = vec![
            Plane::new(Channel::Red, 4, 4).unwrap(),
            Plane::new(Channel::Green, 4, 3).unwrap(),
        ];
        assert!(matches!(
            Raster::new(planes),
            Err(Error::InconsistentPlaneShape(_))
        ));
    }

    #[test]
    fn at_checks_plane_and_pixel() {
        let mut red = Plane::new(Channel::Red, 2, 2).unwrap();
        red.set(1, 0, 200).unwrap();
        let raster = Raster::new(vec![red, Plane::new(Channel::Alpha, 2, 2).unwrap()]).unwrap();
        assert_eq!(raster.at(1, 0, 0).unwrap(), 200);
        assert_eq!((raster.width(), raster.height(), raster.depth()), (2, 2, 2));
        assert!(matches!(
            raster.at(0, 0, 2),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            raster.at(2, 0, 0),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let plane = Plane::from_raw(Channel::Grayscale, 3, 1, vec![10, 20, 30]).unwrap();
        let raster = Raster::new(vec![plane]).unwrap();
        let kernel = Kernel::from_slice(&[2.0]).unwrap();

        let out = raster.apply(&kernel, Normalization::Truncate);
        assert_eq!(raster.plane(0).unwrap().as_slice(), &[10, 20, 30]);
        assert_eq!(out.plane(0).unwrap().as_slice(), &[20, 40, 60]);

        let mut in_place = raster.clone();
        in_place.apply_in_place(&kernel, Normalization::Truncate);
        assert_eq!(in_place, out);

        let planes = out.into_planes();
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].role(), Channel::Grayscale);
    }
}
