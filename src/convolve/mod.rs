//! Convolution engine: windowed sums, per-plane extrema, normalization.
//!
//! - [`window_sum`]: weighted sum of one pixel's neighbourhood; source cells
//!   outside the plane contribute nothing.
//! - [`Extrema`]: running min/max of a plane's sums, reduced per row and
//!   merged at the join.
//! - [`Normalization`]: turns a plane's sum field back into bytes.
//! - [`ConvolutionEngine`]: runs the two phases (sum, normalize) for every
//!   plane of a raster.
pub mod engine;
pub mod extrema;
pub mod normalize;
pub mod window;

pub use self::engine::{ConvolutionEngine, ConvolveOptions};
pub use self::extrema::Extrema;
pub use self::normalize::Normalization;
pub use self::window::window_sum;
