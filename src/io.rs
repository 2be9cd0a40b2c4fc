use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Encoder quality for lossy output formats
pub const JPEG_QUALITY: u8 = 95;

/// Open and decode an image, sniffing the format from its contents
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    info!(
        "Loaded image: {:?} ({}x{}, {:?})",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Write an image, choosing the format from the path's extension
pub fn save_image(img: &DynamicImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|_| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            match img {
                DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => {
                    img.write_with_encoder(encoder)?
                }
                // JPEG carries neither alpha nor 16-bit samples
                _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?,
            }
        }
        _ => img.write_to(&mut writer, format)?,
    }
    // dropping a BufWriter swallows the final write error
    writer.flush()?;

    info!(
        "Wrote {:?} ({}x{}, {:?})",
        path,
        img.width(),
        img.height(),
        format
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageError, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert!(matches!(
            save_image(&img, &dir.path().join("out.notaformat")),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 128])));
        save_image(&img, &path).unwrap();

        let back = open_image(&path).unwrap();
        assert_eq!((back.width(), back.height()), (8, 8));
        assert!(!back.color().has_alpha());
    }

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 5, Rgb([1, 2, 3])));
        save_image(&img, &path).unwrap();
        assert_eq!(open_image(&path).unwrap().to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn test_jpeg_uses_fixed_quality() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, 77])
        }));
        save_image(&img, &path).unwrap();

        let mut expected = Vec::new();
        img.write_with_encoder(JpegEncoder::new_with_quality(&mut expected, 95))
            .unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
        for name in ["full.jpg", "full.png"] {
            let path = dir.path().join(name);
            std::os::unix::fs::symlink("/dev/full", &path).unwrap();
            let result = save_image(&img, &path);
            assert!(
                matches!(
                    result,
                    Err(Error::Io(_)) | Err(Error::Image(ImageError::IoError(_)))
                ),
                "{}: {:?}",
                name,
                result
            );
        }
    }

    #[test]
    fn test_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(open_image(&path), Err(Error::Image(_))));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_image(&dir.path().join("nope.png")),
            Err(Error::Io(_))
        ));
    }
}
