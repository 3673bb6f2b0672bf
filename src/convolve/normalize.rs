//! Mapping raw convolution sums back into bytes.
//!
//! Both policies run over a whole plane with that plane's own [`Extrema`].
use super::extrema::Extrema;
use crate::image::{ImageView, SumField};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Stretch `[min, max]` linearly onto `[0, 255]`. A flat field maps to 0.
    #[default]
    LinearStretch,
    /// `floor(sum)` reduced modulo 256 with a non-negative remainder.
    Truncate,
}

impl Normalization {
    #[inline]
    pub fn to_byte(self, sum: f32, extrema: Extrema) -> u8 {
        match self {
            Normalization::LinearStretch => stretch(sum, extrema),
            Normalization::Truncate => truncate(sum),
        }
    }

    /// Normalize a whole field into a row-major byte buffer.
    pub fn apply(self, field: &SumField, extrema: Extrema) -> Vec<u8> {
        let mut out = Vec::with_capacity(field.len());
        for row in field.rows() {
            out.extend(row.iter().map(|&sum| self.to_byte(sum, extrema)));
        }
        out
    }
}

fn stretch(sum: f32, extrema: Extrema) -> u8 {
    if extrema.is_flat() {
        return 0;
    }
    let min = extrema.min as f64;
    let range = extrema.max as f64 - min;
    let scaled = ((sum as f64 - min) * 255.0 / range).floor();
    scaled.clamp(0.0, 255.0) as u8
}

fn truncate(sum: f32) -> u8 {
    (sum.floor() as i64).rem_euclid(256) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_wraps_with_floor_mod() {
        let any = Extrema::empty();
        assert_eq!(Normalization::Truncate.to_byte(-1.0, any), 255);
        assert_eq!(Normalization::Truncate.to_byte(256.0, any), 0);
        assert_eq!(Normalization::Truncate.to_byte(130.0, any), 130);
        assert_eq!(Normalization::Truncate.to_byte(130.9, any), 130);
        assert_eq!(Normalization::Truncate.to_byte(-0.5, any), 255);
        assert_eq!(Normalization::Truncate.to_byte(-257.0, any), 255);
    }

    #[test]
    fn stretch_maps_range_onto_bytes() {
        let extrema = Extrema::new(-10.0, 10.0);
        let stretch = Normalization::LinearStretch;
        assert_eq!(stretch.to_byte(0.0, extrema), 127);
        assert_eq!(stretch.to_byte(-10.0, extrema), 0);
        assert_eq!(stretch.to_byte(10.0, extrema), 255);
    }

    #[test]
    fn flat_range_maps_to_zero() {
        let extrema = Extrema::new(42.0, 42.0);
        assert_eq!(Normalization::LinearStretch.to_byte(42.0, extrema), 0);
    }

    #[test]
    fn apply_walks_rows_in_order() {
        let mut field = SumField::new(2, 2);
        field
            .as_mut_slice()
            .copy_from_slice(&[0.0, 10.0, 20.0, 40.0]);
        let out = Normalization::LinearStretch.apply(&field, Extrema::new(0.0, 40.0));
        assert_eq!(out, vec![0, 63, 127, 255]);
    }

    #[test]
    fn modes_deserialize_from_snake_case() {
        let mode: Normalization = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(mode, Normalization::Truncate);
        let mode: Normalization = serde_json::from_str("\"linear_stretch\"").unwrap();
        assert_eq!(mode, Normalization::LinearStretch);
    }
}
