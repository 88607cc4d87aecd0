use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use crate::imaging::domain::image_writer::{EncodeError, ImageWriter};
use crate::shared::frame::Frame;

/// Writes frames to image files using the `image` crate.
///
/// JPEG output honours the requested quality; other formats are written
/// with the encoder's defaults.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame, quality: u8) -> Result<(), EncodeError> {
        let format = ImageFormat::from_path(path)
            .map_err(|_| EncodeError::UnsupportedExtension(path.to_path_buf()))?;
        let image = to_dynamic(frame).ok_or_else(|| EncodeError::InvalidFrame {
            path: path.to_path_buf(),
            channels: frame.channels(),
        })?;

        // Ensure parent directory exists (infrastructure concern)
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EncodeError::Create {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let encoded = if format == ImageFormat::Jpeg {
            let file = File::create(path).map_err(|source| EncodeError::Create {
                path: path.to_path_buf(),
                source,
            })?;
            let encoder =
                JpegEncoder::new_with_quality(BufWriter::new(file), quality.clamp(1, 100));
            image.write_with_encoder(encoder)
        } else {
            image.save_with_format(path, format)
        };
        encoded.map_err(|source| EncodeError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn to_dynamic(frame: &Frame) -> Option<DynamicImage> {
    let (width, height) = (frame.width(), frame.height());
    let data = frame.data().to_vec();
    match frame.channels() {
        1 => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame(width: u32, height: u32, r: u8, g: u8, b: u8) -> Frame {
        Frame::filled(width, height, &[r, g, b])
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        ImageFileWriter::new()
            .write(&path, &make_frame(100, 80, 50, 100, 200), 95)
            .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &make_frame(50, 50, 50, 100, 200), 95)
            .unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (50, 50));
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200]);
    }

    #[test]
    fn test_lower_quality_gives_smaller_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = Vec::new();
        for i in 0..(64u32 * 64) {
            data.extend_from_slice(&[(i % 251) as u8, (i * 7 % 253) as u8, (i * 13 % 255) as u8]);
        }
        let frame = Frame::new(data, 64, 64, 3);
        let writer = ImageFileWriter::new();
        let high = dir.path().join("high.jpg");
        let low = dir.path().join("low.jpg");
        writer.write(&high, &frame, 95).unwrap();
        writer.write(&low, &frame, 10).unwrap();
        let size = |p: &Path| std::fs::metadata(p).unwrap().len();
        assert!(size(&low) < size(&high));
    }

    #[test]
    fn test_gray_frame_written_as_gray() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        ImageFileWriter::new()
            .write(&path, &Frame::filled(5, 5, &[42]), 95)
            .unwrap();
        let img = image::open(&path).unwrap();
        assert!(!img.color().has_color());
        assert_eq!(img.to_luma8().get_pixel(2, 2).0, [42]);
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.png");
        ImageFileWriter::new()
            .write(&path, &make_frame(4, 4, 0, 0, 0), 95)
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFileWriter::new()
            .write(&dir.path().join("out.notanimage"), &make_frame(4, 4, 0, 0, 0), 95)
            .unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedExtension(_)));
    }

    #[test]
    fn test_alpha_frame_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFileWriter::new()
            .write(&dir.path().join("out.png"), &Frame::filled(2, 2, &[1, 2, 3, 4]), 95)
            .unwrap_err();
        assert!(matches!(err, EncodeError::InvalidFrame { channels: 4, .. }));
    }
}
