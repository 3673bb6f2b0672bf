use crate::convolve::{ConvolveOptions, Normalization};
use crate::error::{Error, Result};
use crate::kernel::{Kernel, Preset};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `apply_filter` tool.
#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub kernel: KernelConfig,
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(flatten)]
    pub engine: ConvolveOptions,
    /// Load inputs as a single grayscale plane instead of RGBA.
    #[serde(default)]
    pub grayscale: bool,
    /// Appended to each input's file stem to name its output.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Optional JSON report covering the whole batch.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

fn default_suffix() -> String {
    "_filtered".to_string()
}

/// Either a stock kernel by name (`preset`) or explicit row-by-row
/// `weights`; exactly one of the two must be given.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KernelConfig {
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub weights: Option<Vec<f32>>,
    /// Overrides the kernel's factor metadata.
    #[serde(default)]
    pub factor: Option<f32>,
    /// Multiply `factor` into the weights before convolving.
    #[serde(default)]
    pub bake_factor: bool,
}

impl KernelConfig {
    pub fn build(&self) -> Result<Kernel> {
        let kernel = match (self.preset, &self.weights) {
            (Some(preset), None) => preset.kernel(),
            (None, Some(weights)) => Kernel::from_slice(weights)?,
            (Some(_), Some(_)) => {
                return Err(Error::InvalidShape(
                    "kernel config sets both `preset` and `weights`".to_string(),
                ))
            }
            (None, None) => {
                return Err(Error::InvalidShape(
                    "kernel config needs `preset` or `weights`".to_string(),
                ))
            }
        };
        let kernel = match self.factor {
            Some(f) => kernel.with_factor(f),
            None => kernel,
        };
        if self.bake_factor {
            kernel.baked()
        } else {
            Ok(kernel)
        }
    }
}

impl FilterToolConfig {
    /// Output path for `input`: `<output_dir>/<stem><suffix>.<ext>`, keeping
    /// the input's extension and falling back to `png`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let ext = input
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_string());
        self.output_dir.join(format!("{stem}{}.{ext}", self.suffix))
    }
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig> {
    let config_error = |reason: String| Error::Config {
        path: path.to_path_buf(),
        reason,
    };
    let data = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let config: FilterToolConfig =
        serde_json::from_str(&data).map_err(|e| config_error(e.to_string()))?;
    if config.inputs.is_empty() {
        return Err(config_error("no inputs listed".to_string()));
    }
    config
        .kernel
        .build()
        .map_err(|e| config_error(e.to_string()))?;
    Ok(config)
}
