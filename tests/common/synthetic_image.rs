use raster_convolve::{Channel, Plane, Raster};

/// Plane filled with one value.
pub fn constant_plane(role: Channel, width: usize, height: usize, value: u8) -> Plane {
    Plane::from_raw(role, width, height, vec![value; width * height])
        .expect("dimensions are positive")
}

/// Four RGBA planes with distinct, position-dependent content.
pub fn patterned_rgba(width: usize, height: usize) -> Raster {
    let planes = Channel::RGBA
        .iter()
        .enumerate()
        .map(|(c, &role)| {
            let data = (0..width * height)
                .map(|i| {
                    let (x, y) = (i % width, i / width);
                    ((x * 31 + y * 17 + c * 59) % 256) as u8
                })
                .collect();
            Plane::from_raw(role, width, height, data).expect("buffer matches dimensions")
        })
        .collect();
    Raster::new(planes).expect("planes share dimensions")
}

/// High-contrast checkerboard on a single grayscale plane.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> Raster {
    assert!(cell > 0, "cell size must be positive");
    let data = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            if ((x / cell) + (y / cell)) & 1 == 0 {
                32u8
            } else {
                220u8
            }
        })
        .collect();
    let plane = Plane::from_raw(Channel::Grayscale, width, height, data)
        .expect("buffer matches dimensions");
    Raster::new(vec![plane]).expect("single plane")
}
