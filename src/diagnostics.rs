//! Serializable summaries of an `apply` run.
use crate::convolve::Normalization;
use crate::plane::Channel;
use serde::Serialize;

/// Per-plane outcome: extrema of the raw sums and time spent.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneReport {
    pub role: Channel,
    pub min: f32,
    pub max: f32,
    /// All sums equal; linear stretch emitted a constant 0.
    pub flat: bool,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    pub width: usize,
    pub height: usize,
    pub kernel_size: usize,
    pub normalization: Normalization,
    pub parallel: bool,
    pub total_ms: f64,
    pub planes: Vec<PlaneReport>,
}

/// Report for one input of a batch run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
    pub report: Option<ApplyReport>,
}
