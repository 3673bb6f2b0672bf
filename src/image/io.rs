//! Decode/encode helpers backed by the `image` crate, plus JSON output.
//!
//! - `load_rgba_planes`: read a PNG/JPEG/etc. into red, green, blue, alpha planes.
//! - `load_grayscale_plane`: read into one 8-bit grayscale plane.
//! - `save_rgb`: write three planes as an RGB image; the container is picked
//!   from the path extension.
//! - `save_grayscale`: write one plane as an 8-bit grayscale image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageView;
use crate::error::{Error, Result};
use crate::plane::{Channel, Plane};

use image::{GrayImage, RgbImage};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and split it into RGBA planes.
pub fn load_rgba_planes(path: &Path) -> Result<[Plane; 4]> {
    let rgba = image::open(path)
        .map_err(|e| load_error(path, e.to_string()))?
        .into_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    check_decoded(path, width, height)?;
    debug!("decoded {} ({width}x{height})", path.display());

    let mut channels: [Vec<u8>; 4] = std::array::from_fn(|_| Vec::with_capacity(width * height));
    for px in rgba.pixels() {
        for (channel, &value) in channels.iter_mut().zip(px.0.iter()) {
            channel.push(value);
        }
    }
    let [r, g, b, a] = channels;
    let [cr, cg, cb, ca] = Channel::RGBA;
    Ok([
        Plane::from_raw(cr, width, height, r)?,
        Plane::from_raw(cg, width, height, g)?,
        Plane::from_raw(cb, width, height, b)?,
        Plane::from_raw(ca, width, height, a)?,
    ])
}

/// Load an image from disk and convert it to one grayscale plane.
pub fn load_grayscale_plane(path: &Path) -> Result<Plane> {
    let gray = image::open(path)
        .map_err(|e| load_error(path, e.to_string()))?
        .into_luma8();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    check_decoded(path, width, height)?;
    Plane::from_raw(Channel::Grayscale, width, height, gray.into_raw())
}

/// Save three equally sized planes as an RGB image.
pub fn save_rgb(path: &Path, r: &Plane, g: &Plane, b: &Plane) -> Result<()> {
    if r.dims() != g.dims() || r.dims() != b.dims() {
        return Err(save_error(path, "color planes differ in size".to_string()));
    }
    let (width, height) = r.dims();
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for ((&rv, &gv), &bv) in r.row(y).iter().zip(g.row(y)).zip(b.row(y)) {
            data.extend_from_slice(&[rv, gv, bv]);
        }
    }
    let out = RgbImage::from_raw(width as u32, height as u32, data)
        .ok_or_else(|| save_error(path, "failed to create image buffer".to_string()))?;
    ensure_parent_dir(path).map_err(|e| save_error(path, e))?;
    out.save(path).map_err(|e| save_error(path, e.to_string()))
}

/// Save one plane as an 8-bit grayscale image.
pub fn save_grayscale(path: &Path, plane: &Plane) -> Result<()> {
    let (width, height) = plane.dims();
    let out = GrayImage::from_raw(width as u32, height as u32, plane.as_slice().to_vec())
        .ok_or_else(|| save_error(path, "failed to create image buffer".to_string()))?;
    ensure_parent_dir(path).map_err(|e| save_error(path, e))?;
    out.save(path).map_err(|e| save_error(path, e.to_string()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json_error = |reason: String| Error::Json {
        path: path.to_path_buf(),
        reason,
    };
    ensure_parent_dir(path).map_err(json_error)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| json_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| json_error(e.to_string()))
}

fn check_decoded(path: &Path, width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(load_error(
            path,
            format!("image has zero dimension {width}x{height}"),
        ));
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> std::result::Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

fn load_error(path: &Path, reason: String) -> Error {
    Error::ImageLoad {
        path: path.to_path_buf(),
        reason,
    }
}

fn save_error(path: &Path, reason: String) -> Error {
    Error::ImageSave {
        path: path.to_path_buf(),
        reason,
    }
}
