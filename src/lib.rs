#![doc = include_str!("../README.md")]

pub mod config;
pub mod convolve;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod kernel;
pub mod plane;
pub mod raster;

// --- High-level re-exports -------------------------------------------------

pub use crate::convolve::{ConvolutionEngine, ConvolveOptions, Extrema, Normalization};
pub use crate::diagnostics::{ApplyReport, PlaneReport};
pub use crate::error::{Error, Result};
pub use crate::kernel::{Kernel, Preset};
pub use crate::plane::{Channel, Plane};
pub use crate::raster::Raster;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use raster_convolve::prelude::*;
///
/// # fn main() -> raster_convolve::Result<()> {
/// let kernel = Kernel::from_slice(&[1.0; 9])?.with_factor(1.0 / 9.0);
/// let mut image = Raster::open("test.png")?;
/// image.apply_in_place(&kernel, Normalization::LinearStretch);
/// image.save("result.png")?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{Channel, ConvolutionEngine, Kernel, Normalization, Plane, Raster};
}
