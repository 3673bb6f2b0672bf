mod common;

use common::synthetic_image::{checkerboard, patterned_rgba};
use raster_convolve::image::io::write_json_file;
use raster_convolve::{ConvolutionEngine, Error, Normalization, Preset, Raster};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("raster_convolve_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn rgb_png_round_trip_keeps_color_planes() {
    let dir = scratch_dir("rgb");
    let path = dir.join("nested/pattern.png");
    let raster = patterned_rgba(19, 7);
    raster.save(&path).unwrap();

    let loaded = Raster::open(&path).unwrap();
    assert_eq!(loaded.depth(), 4);
    assert_eq!((loaded.width(), loaded.height()), (19, 7));
    for i in 0..3 {
        assert_eq!(loaded.plane(i).unwrap(), raster.plane(i).unwrap());
    }
    // Alpha is not written; decoding an RGB file yields opaque alpha.
    assert!(loaded.plane(3).unwrap().as_slice().iter().all(|&a| a == 255));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn grayscale_round_trip() {
    let dir = scratch_dir("gray");
    let path = dir.join("board.png");
    let raster = checkerboard(12, 12, 3);
    raster.save(&path).unwrap();

    let loaded = Raster::open_grayscale(&path).unwrap();
    assert_eq!(loaded, raster);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_a_load_error() {
    let err = Raster::open(scratch_dir("missing").join("nope.png")).unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }), "{err}");
}

#[test]
fn undecodable_bytes_are_a_load_error() {
    let dir = scratch_dir("garbage");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("garbage.png");
    fs::write(&path, b"not a png").unwrap();

    let err = Raster::open(&path).unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }), "{err}");
    let err = Raster::open_grayscale(&path).unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }), "{err}");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_extension_is_a_save_error() {
    let dir = scratch_dir("badext");
    let err = checkerboard(4, 4, 2)
        .save(dir.join("out.not_an_image_format"))
        .unwrap_err();
    assert!(matches!(err, Error::ImageSave { .. }), "{err}");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn filter_file_and_write_report() {
    let dir = scratch_dir("pipeline");
    let input = dir.join("in.png");
    patterned_rgba(32, 24).save(&input).unwrap();

    let raster = Raster::open(&input).unwrap();
    let (filtered, report) = ConvolutionEngine::default().apply_with_report(
        &raster,
        &Preset::BoxBlur.kernel(),
        Normalization::LinearStretch,
    );
    filtered.save(dir.join("out.png")).unwrap();
    write_json_file(&dir.join("report.json"), &report).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("report.json")).unwrap()).unwrap();
    assert_eq!(json["kernelSize"], 3);
    assert_eq!(json["normalization"], "linear_stretch");
    assert_eq!(json["planes"].as_array().unwrap().len(), 4);
    assert_eq!(json["planes"][3]["role"], "Alpha");
    let _ = fs::remove_dir_all(&dir);
}
