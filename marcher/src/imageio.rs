//! Decoding and encoding image files.
//!
//! Input format is detected from the file contents, so binary PPM (with or
//! without `#` comment lines) and PNG both work regardless of extension.
//! Output is PNG for a `.png` path and binary PPM (P6) otherwise.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageReader};
use log::debug;
use marcher_core::{Image, Rgb};

use crate::error::RunError;

/// Read an image file as 8-bit RGB.
pub fn load_image(path: &Path) -> Result<Image, RunError> {
    let io_err = |source| RunError::Io {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| RunError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels: Vec<Rgb> = rgb.pixels().map(|p| Rgb::from(p.0)).collect();
    debug!("loaded {} ({width}x{height})", path.display());
    Image::from_pixels(width, height, pixels).ok_or(RunError::TooLarge { width, height })
}

/// Write `im` to `path`: PNG for a `.png` extension, binary PPM otherwise.
pub fn save_image(path: &Path, im: &Image) -> Result<(), RunError> {
    let too_large = || RunError::TooLarge {
        width: im.width(),
        height: im.height(),
    };
    let width = u32::try_from(im.width()).map_err(|_| too_large())?;
    let height = u32::try_from(im.height()).map_err(|_| too_large())?;
    let bytes = im.as_rgb_bytes();

    let io_err = |source| RunError::Io {
        path: path.to_path_buf(),
        source,
    };
    let image_err = |source| RunError::Image {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    if is_png(path) {
        PngEncoder::new(&mut out)
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8)
            .map_err(image_err)?;
    } else {
        PnmEncoder::new(&mut out)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8)
            .map_err(image_err)?;
    }
    out.flush().map_err(io_err)?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marcher_core::Point;

    fn sample() -> Image {
        Image::from_fn(3, 2, |p| Rgb::new((p.x * 80) as u8, (p.y * 200) as u8, 7))
    }

    #[test]
    fn ppm_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ppm");
        let im = sample();
        save_image(&path, &im).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert_eq!(load_image(&path).unwrap(), im);
    }

    #[test]
    fn png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let im = sample();
        save_image(&path, &im).unwrap();
        assert_eq!(load_image(&path).unwrap(), im);
    }

    #[test]
    fn ppm_with_header_comment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commented.ppm");
        let mut data = b"P6\n# written by hand\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        std::fs::write(&path, data).unwrap();

        let im = load_image(&path).unwrap();
        assert_eq!(im.width(), 2);
        assert_eq!(im.height(), 1);
        assert_eq!(im.at(Point::new(0, 0)), Some(Rgb::new(255, 0, 0)));
        assert_eq!(im.at(Point::new(1, 0)), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn format_detected_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually-ppm.img");
        save_image(&path, &sample()).unwrap();
        assert_eq!(load_image(&path).unwrap(), sample());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("nope.ppm")).unwrap_err();
        assert!(matches!(err, RunError::Io { .. }));
        assert!(err.to_string().contains("nope.ppm"));
    }

    #[test]
    fn garbage_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.ppm");
        std::fs::write(&path, b"P6\n2 2\n255\n\x01").unwrap();
        assert!(matches!(load_image(&path), Err(RunError::Image { .. })));
    }
}
