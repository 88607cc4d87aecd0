use std::path::Path;

use image::{DynamicImage, ImageError};

use crate::imaging::domain::image_reader::{DecodeError, ImageReader};
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate.
///
/// Gray sources (with or without alpha) become one-channel frames; every
/// other source becomes RGB. Alpha is dropped rather than composited.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, DecodeError> {
        if !path.exists() {
            return Err(DecodeError::NotFound(path.to_path_buf()));
        }
        let image = image::open(path).map_err(|source| match source {
            ImageError::Unsupported(_) => DecodeError::Unsupported {
                path: path.to_path_buf(),
                source,
            },
            _ => DecodeError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let frame = to_frame(image);
        log::debug!(
            "Decoded {} ({}x{}, {} channel(s))",
            path.display(),
            frame.width(),
            frame.height(),
            frame.channels()
        );
        Ok(frame)
    }
}

fn to_frame(image: DynamicImage) -> Frame {
    if image.color().has_color() {
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        Frame::new(rgb.into_raw(), width, height, 3)
    } else {
        let gray = image.into_luma8();
        let (width, height) = gray.dimensions();
        Frame::new(gray.into_raw(), width, height, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_rgb(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([50, 100, 200]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_reads_rgb_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rgb(dir.path(), "in.png", 100, 80);
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!((frame.width(), frame.height(), frame.channels()), (100, 80, 3));
        assert_eq!(frame.pixel(0, 0), &[50, 100, 200]);
    }

    #[test]
    fn test_gray_png_is_single_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_pixel(8, 6, image::Luma([77]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 1);
        assert_eq!((frame.width(), frame.height()), (8, 6));
        assert_eq!(frame.pixel(5, 7), &[77]);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.pixel(0, 0), &[10, 20, 30]);
    }

    #[test]
    fn test_missing_file() {
        let err = ImageFileReader::new()
            .read(Path::new("/nonexistent/photo.jpg"))
            .unwrap_err();
        assert!(matches!(err, DecodeError::NotFound(_)));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = ImageFileReader::new().read(&path).unwrap_err();
        assert!(err.to_string().contains("broken.png"));
    }
}
