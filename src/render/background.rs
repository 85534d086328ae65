use image::{Rgb, RgbImage};

use crate::raster::Grid;


/// Shade a terrain grid into the static grayscale backdrop.
///
/// `zmin`/`zmax` are fixed run constants, not derived from the data; the
/// normalized elevation is clamped to [0, 1] and written to all three
/// channels.
pub fn build_background(terrain: &Grid, zmin: f32, zmax: f32) -> RgbImage {
    let (w, h) = terrain.dimensions();
    let mut buffer = RgbImage::new(w as u32, h as u32);

    for row in 0..h {
        for col in 0..w {
            let shade = (terrain.value(row, col) - zmin) / (zmax - zmin);
            let gray = (shade.clamp(0.0, 1.0) * 255.0).round() as u8;
            buffer.put_pixel(col as u32, row as u32, Rgb([gray, gray, gray]));
        }
    }

    buffer
}
