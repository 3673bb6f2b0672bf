use serde::Serialize;

/// Min/max pair of the convolution sums seen so far.
///
/// The empty value (`min = +inf`, `max = -inf`) is the identity of
/// [`Extrema::merge`], so row-local results can be folded in any order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Extrema {
    pub min: f32,
    pub max: f32,
}

impl Default for Extrema {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extrema {
    pub const fn empty() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn observe(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// `true` when every observed sum was identical.
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}
