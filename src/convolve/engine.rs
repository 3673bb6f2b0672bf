//! Two-phase convolution over every plane of a raster.
//!
//! Phase one fills a [`SumField`] row by row, each row folding its own
//! [`Extrema`]; the row results are merged once all rows are done. Phase two
//! normalizes the finished field with the merged extrema. With the `parallel`
//! feature the rows of phase one are spread over rayon's pool; the inner loop
//! is the same in both modes, so output is byte-identical.
use super::extrema::Extrema;
use super::normalize::Normalization;
use super::window::window_sum;
use crate::diagnostics::{ApplyReport, PlaneReport};
use crate::image::{ImageView, SumField};
use crate::kernel::Kernel;
use crate::plane::Plane;
use crate::raster::Raster;

use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Knobs for [`ConvolutionEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvolveOptions {
    /// Evaluate rows on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for ConvolveOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ConvolveOptions {
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Stateless convolution runner; every call is a pure function of its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvolutionEngine {
    options: ConvolveOptions,
}

impl ConvolutionEngine {
    pub fn new(options: ConvolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConvolveOptions {
        self.options
    }

    /// `true` when rows will actually run on the thread pool.
    pub fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.options.parallel
    }

    /// Convolve every plane of `raster`, returning a new raster with the same
    /// roles, order and dimensions.
    pub fn apply(&self, raster: &Raster, kernel: &Kernel, mode: Normalization) -> Raster {
        self.apply_with_report(raster, kernel, mode).0
    }

    pub fn apply_with_report(
        &self,
        raster: &Raster,
        kernel: &Kernel,
        mode: Normalization,
    ) -> (Raster, ApplyReport) {
        let start = Instant::now();
        debug!(
            "applying {0}x{0} kernel to {1} planes ({2}x{3}), {mode:?}, parallel={4}",
            kernel.size(),
            raster.depth(),
            raster.width(),
            raster.height(),
            self.runs_parallel()
        );

        let (planes, reports): (Vec<Plane>, Vec<PlaneReport>) = raster
            .planes()
            .iter()
            .map(|plane| self.convolve_plane(plane, kernel, mode))
            .unzip();

        let report = ApplyReport {
            width: raster.width(),
            height: raster.height(),
            kernel_size: kernel.size(),
            normalization: mode,
            parallel: self.runs_parallel(),
            total_ms: start.elapsed().as_secs_f64() * 1000.0,
            planes: reports,
        };
        debug!("filters applied in {:.3} ms", report.total_ms);
        (Raster::from_planes_unchecked(planes), report)
    }

    /// Convolve and normalize a single plane.
    pub fn convolve_plane(
        &self,
        plane: &Plane,
        kernel: &Kernel,
        mode: Normalization,
    ) -> (Plane, PlaneReport) {
        let start = Instant::now();
        let (field, extrema) = self.sum_field(plane, kernel);
        if extrema.is_flat() && mode == Normalization::LinearStretch {
            debug!(
                "plane {} has a flat response {:.3}; linear stretch maps it to 0",
                plane.role(),
                extrema.min
            );
        }
        let out = plane.replaced(mode.apply(&field, extrema));
        let report = PlaneReport {
            role: plane.role(),
            min: extrema.min,
            max: extrema.max,
            flat: extrema.is_flat(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "plane {}: sums in [{:.3}, {:.3}], {:.3} ms",
            report.role, report.min, report.max, report.elapsed_ms
        );
        (out, report)
    }

    /// Raw convolution sums of `plane` and their extrema. Returns only after
    /// every row has been computed.
    pub fn sum_field(&self, plane: &Plane, kernel: &Kernel) -> (SumField, Extrema) {
        let mut field = SumField::new(plane.width(), plane.height());
        let extrema = if self.runs_parallel() {
            fill_rows_parallel(plane, kernel, &mut field)
        } else {
            fill_rows(plane, kernel, &mut field)
        };
        (field, extrema)
    }
}

fn fill_row(plane: &Plane, kernel: &Kernel, y: usize, row: &mut [f32]) -> Extrema {
    let mut extrema = Extrema::empty();
    for (x, out) in row.iter_mut().enumerate() {
        let sum = window_sum(plane, kernel, x, y);
        extrema.observe(sum);
        *out = sum;
    }
    extrema
}

fn fill_rows(plane: &Plane, kernel: &Kernel, field: &mut SumField) -> Extrema {
    let width = plane.width();
    field
        .as_mut_slice()
        .chunks_mut(width)
        .enumerate()
        .map(|(y, row)| fill_row(plane, kernel, y, row))
        .fold(Extrema::empty(), Extrema::merge)
}

#[cfg(feature = "parallel")]
fn fill_rows_parallel(plane: &Plane, kernel: &Kernel, field: &mut SumField) -> Extrema {
    use rayon::prelude::*;

    let width = plane.width();
    field
        .as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| fill_row(plane, kernel, y, row))
        .reduce(Extrema::empty, Extrema::merge)
}

#[cfg(not(feature = "parallel"))]
fn fill_rows_parallel(plane: &Plane, kernel: &Kernel, field: &mut SumField) -> Extrema {
    fill_rows(plane, kernel, field)
}
