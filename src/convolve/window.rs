use crate::image::ImageView;
use crate::kernel::Kernel;
use crate::plane::Plane;

/// Weighted sum of the neighbourhood of `(px, py)`.
///
/// Kernel cell `(kx, ky)` pairs with source `(px - d + kx, py - d + ky)`.
/// Sources outside `[0, width) × [0, height)` are skipped, not clamped or
/// wrapped. The sum is left unclamped.
pub fn window_sum(plane: &Plane, kernel: &Kernel, px: usize, py: usize) -> f32 {
    let (w, h) = (plane.width() as isize, plane.height() as isize);
    let size = kernel.size();
    let d = kernel.displacement() as isize;
    let x0 = px as isize - d;
    let y0 = py as isize - d;

    let mut acc = 0.0f32;
    for kx in 0..size {
        let sx = x0 + kx as isize;
        if sx < 0 || sx >= w {
            continue;
        }
        for ky in 0..size {
            let sy = y0 + ky as isize;
            if sy < 0 || sy >= h {
                continue;
            }
            acc += plane.get(sx as usize, sy as usize) as f32 * kernel.weight(kx, ky);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::Channel;

    #[test]
    fn single_pixel_sees_only_the_center() {
        let plane = Plane::from_raw(Channel::Grayscale, 1, 1, vec![7]).unwrap();
        let kernel = Kernel::from_slice(&[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
        assert_eq!(window_sum(&plane, &kernel, 0, 0), 7.0 * 6.0);

        let wide = Kernel::from_slice(&(0..25).map(|i| i as f32).collect::<Vec<_>>()).unwrap();
        assert_eq!(window_sum(&plane, &wide, 0, 0), 7.0 * wide.center());
    }

    #[test]
    fn corner_skips_outside_cells() {
        // 2x2 plane of ones, 3x3 ones kernel: each corner sees all 4 pixels.
        let plane = Plane::from_raw(Channel::Grayscale, 2, 2, vec![1; 4]).unwrap();
        let kernel = Kernel::from_slice(&[1.0; 9]).unwrap();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(window_sum(&plane, &kernel, x, y), 4.0);
        }
    }

    #[test]
    fn kernel_offsets_follow_x_major_layout() {
        // A kernel that only weights the cell to the right of the anchor.
        let plane = Plane::from_raw(Channel::Grayscale, 3, 1, vec![10, 20, 30]).unwrap();
        let kernel = Kernel::from_grid(vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap();
        assert_eq!(window_sum(&plane, &kernel, 0, 0), 20.0);
        assert_eq!(window_sum(&plane, &kernel, 1, 0), 30.0);
        assert_eq!(window_sum(&plane, &kernel, 2, 0), 0.0);
    }

    #[test]
    fn sums_may_go_negative() {
        let plane = Plane::from_raw(Channel::Grayscale, 3, 3, vec![0, 0, 0, 0, 50, 0, 0, 0, 0]).unwrap();
        let kernel = Kernel::from_slice(&[1.0, 1.0, 1.0, 1.0, -8.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(window_sum(&plane, &kernel, 1, 1), -400.0);
        assert_eq!(window_sum(&plane, &kernel, 0, 0), 50.0);
    }
}
