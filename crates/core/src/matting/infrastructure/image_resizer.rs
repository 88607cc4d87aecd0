use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Pixel, Rgb};

use crate::matting::domain::frame_resizer::FrameResizer;
use crate::shared::frame::Frame;

/// Resamples frames with `image::imageops::resize`.
///
/// Handles the gray and RGB frames the compositor accepts.
/// Downscaling uses an anti-aliasing Lanczos filter; upscaling uses
/// Catmull-Rom for a smooth result. Output samples are clamped to `u8`
/// by the filter itself.
pub struct ImageResizer {
    downscale: FilterType,
    upscale: FilterType,
}

impl ImageResizer {
    pub fn new(downscale: FilterType, upscale: FilterType) -> Self {
        Self { downscale, upscale }
    }

    fn filter_for(&self, frame: &Frame, width: u32, height: u32) -> FilterType {
        let source = frame.width() as u64 * frame.height() as u64;
        if (width as u64 * height as u64) < source {
            self.downscale
        } else {
            self.upscale
        }
    }
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self::new(FilterType::Lanczos3, FilterType::CatmullRom)
    }
}

impl FrameResizer for ImageResizer {
    fn resize(
        &self,
        frame: &Frame,
        width: u32,
        height: u32,
    ) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        let filter = self.filter_for(frame, width, height);
        let data = match frame.channels() {
            1 => resize_as::<Luma<u8>>(frame, width, height, filter)?,
            3 => resize_as::<Rgb<u8>>(frame, width, height, filter)?,
            n => return Err(format!("cannot resize a {n}-channel frame").into()),
        };
        Ok(Frame::new(data, width, height, frame.channels()))
    }
}

fn resize_as<P>(
    frame: &Frame,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let source = ImageBuffer::<P, &[u8]>::from_raw(frame.width(), frame.height(), frame.data())
        .ok_or("Frame data does not match its dimensions")?;
    Ok(imageops::resize(&source, width, height, filter).into_raw())
}
