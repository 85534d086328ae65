#[cfg(test)]
mod test_helper;

use image::codecs::png::PngEncoder;
use image::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind};
use std::path::Path;

#[cfg(test)]
pub use test_helper::{with_run_dir, write_flt};

/// Encode a row-major RGB buffer as a PNG file.
pub fn encode_png(
    file_path: &Path,
    img: &RgbImage,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = File::create(file_path)?;
    let ref mut buf = BufWriter::new(file);
    let encoder = PngEncoder::new(buf);

    let (width, height) = img.dimensions();
    match encoder.encode(img.as_raw(), width, height, image::ColorType::Rgb8) {
        Ok(_) => Ok(()),
        Err(err) => Err(Box::new(Error::new(ErrorKind::Other, err.to_string()))),
    }
}
