//! Stock kernels selectable by name from tool configs.
//!
//! Tables below are written the way an image reads: each row of nine numbers
//! is one `y` row, left to right in `x`. They are transposed into the kernel's
//! x-major layout on construction.
use super::Kernel;
use nalgebra::DMatrix;
use serde::Deserialize;

const BOX_3X3: [f32; 9] = [1.0; 9];

const LAPLACE: [f32; 9] = [1.0, 1.0, 1.0, 1.0, -8.0, 1.0, 1.0, 1.0, 1.0];
const STRAIGHT_LAPLACE: [f32; 9] = [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];

const SOBEL_X: [f32; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y: [f32; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

const SHARPEN: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Identity,
    /// 3×3 ones with factor `1/9` as metadata.
    BoxBlur,
    Laplace,
    StraightLaplace,
    SobelX,
    SobelY,
    Sharpen,
}

impl Preset {
    pub fn kernel(self) -> Kernel {
        match self {
            Preset::Identity => Kernel::identity(),
            Preset::BoxBlur => from_image_rows(&BOX_3X3).with_factor(1.0 / 9.0),
            Preset::Laplace => from_image_rows(&LAPLACE),
            Preset::StraightLaplace => from_image_rows(&STRAIGHT_LAPLACE),
            Preset::SobelX => from_image_rows(&SOBEL_X),
            Preset::SobelY => from_image_rows(&SOBEL_Y),
            Preset::Sharpen => from_image_rows(&SHARPEN),
        }
    }
}

fn from_image_rows(table: &[f32; 9]) -> Kernel {
    Kernel {
        weights: DMatrix::from_row_slice(3, 3, table).transpose(),
        apply_factor: true,
        factor: 1.0,
    }
}
