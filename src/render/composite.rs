use image::{Rgb, RgbImage};

use super::cmap::{DEPTH_CMAP, NCOLORS};
use crate::raster::Grid;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{color_index, composite_frame, depth_color};
    use crate::raster::Grid;
    use crate::render::build_background;

    const NODATA: f32 = -9999.0;

    #[test]
    fn dry_and_nodata_cells_keep_the_background_pixel() {
        let terrain = Grid::from_column_major(2, 2, &[0.0; 4]);
        let background = build_background(&terrain, -5.0, 5.0);
        let depth = Grid::from_column_major(2, 2, &[0.0, NODATA, 0.1, 0.05]);

        let frame = composite_frame(&background, &depth, NODATA, 0.1, 2.0);

        assert_eq!(background, frame);
    }

    #[test]
    fn wet_cells_take_the_palette_color() {
        let terrain = Grid::from_column_major(2, 2, &[0.0; 4]);
        let background = build_background(&terrain, -5.0, 5.0);
        // column-major: (0,0)=0.0, (1,0)=0.15, (0,1)=0.05, (1,1)=3.0
        let depth = Grid::from_column_major(2, 2, &[0.0, 0.15, 0.05, 3.0]);

        let frame = composite_frame(&background, &depth, NODATA, 0.1, 2.0);

        assert_eq!(image::Rgb([128, 128, 128]), *frame.get_pixel(0, 0));
        assert_eq!(image::Rgb([128, 128, 128]), *frame.get_pixel(1, 0));
        assert_eq!(depth_color(19), *frame.get_pixel(0, 1));
        assert_eq!(depth_color(255), *frame.get_pixel(1, 1));
    }

    #[test]
    fn index_is_monotonic_over_the_depth_range() {
        let mut last = 0;
        let mut depth = 0.1;

        while depth <= 2.0 {
            let index = color_index(depth, 2.0);
            assert!(index >= last);
            last = index;
            depth += 0.01;
        }
    }

    #[rstest]
    #[case(2.0, 255)]
    #[case(500.0, 255)]
    #[case(1.0, 127)]
    #[case(0.15, 19)]
    fn index_saturates_at_the_last_palette_entry(#[case] depth: f32, #[case] expected: usize) {
        assert_eq!(expected, color_index(depth, 2.0));
    }
}

/// Overlay a colorized depth grid on the background backdrop.
///
/// Cells at or below `depth_tol` are dry and cells equal to `nodata` carry
/// no measurement; both leave the background pixel untouched. The nodata
/// comparison is exact: a sentinel that drifted through a float round-trip
/// will not match and renders as depth. Everything else maps through the
/// palette, saturating at `pink_depth`.
///
/// The background is cloned, never mutated.
pub fn composite_frame(
    background: &RgbImage,
    depth: &Grid,
    nodata: f32,
    depth_tol: f32,
    pink_depth: f32,
) -> RgbImage {
    let mut frame = background.clone();
    let (w, h) = depth.dimensions();
    debug_assert_eq!((w as u32, h as u32), frame.dimensions());

    for row in 0..h {
        for col in 0..w {
            let d = depth.value(row, col);
            if d <= depth_tol || d == nodata {
                continue;
            }

            frame.put_pixel(col as u32, row as u32, depth_color(color_index(d, pink_depth)));
        }
    }

    frame
}

fn color_index(depth: f32, pink_depth: f32) -> usize {
    let saturation = (depth / pink_depth).min(1.0);

    ((NCOLORS - 1) as f32 * saturation).floor() as usize
}

fn depth_color(index: usize) -> Rgb<u8> {
    let [r, g, b] = DEPTH_CMAP[index];

    Rgb([
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ])
}
