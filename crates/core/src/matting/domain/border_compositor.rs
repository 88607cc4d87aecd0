use ndarray::s;

use crate::shared::canvas_spec::CanvasSpec;
use crate::shared::frame::Frame;
use crate::shared::mat_settings::MatSettings;

use super::background::{background_color, fill_samples};
use super::frame_resizer::FrameResizer;
use super::mat_error::MatError;
use super::placement::{plan, validate_canvas};

/// Places an image on a fixed-size, solid-color canvas.
///
/// The image is scaled uniformly so it sits at least `border` pixels from
/// the nearest edge on its tighter axis, then centered (or raised slightly
/// when bottom weighting is on). Everything outside the image keeps the
/// background color.
pub struct BorderCompositor {
    resizer: Box<dyn FrameResizer>,
}

impl BorderCompositor {
    pub fn new(resizer: Box<dyn FrameResizer>) -> Self {
        Self { resizer }
    }

    pub fn add_border(
        &self,
        image: &Frame,
        canvas: CanvasSpec,
        border: u32,
        settings: &MatSettings,
    ) -> Result<Frame, MatError> {
        validate_canvas(canvas, border)?;
        let channels = image.channels();
        if channels != 1 && channels != 3 {
            return Err(MatError::UnsupportedChannels(channels));
        }

        let color = background_color(image, settings.background_luminance)?;
        let fill = fill_samples(color, channels)?;
        log::debug!("Background color {color:?}");

        let placement = plan(
            image.height(),
            image.width(),
            canvas,
            border,
            settings.bottom_weighted,
        )?;

        if placement.is_upscale() {
            log::warn!("Image will be scaled up by {:.3}", placement.scale);
        }

        let resized;
        let placed = if placement.needs_resize(image.height(), image.width()) {
            resized = self
                .resizer
                .resize(image, placement.width, placement.height)
                .map_err(|source| MatError::Resize {
                    width: placement.width,
                    height: placement.height,
                    source,
                })?;
            log::info!("Image rescaled by factor {}", placement.scale);
            &resized
        } else {
            log::info!("Image not rescaled");
            image
        };

        let mut out = Frame::filled(canvas.width, canvas.height, &fill);
        let (top, left) = (placement.top as usize, placement.left as usize);
        let (height, width) = (placed.height() as usize, placed.width() as usize);
        log::debug!("Placing {width}x{height} image at row {top}, column {left}");
        out.as_ndarray_mut()
            .slice_mut(s![top..top + height, left..left + width, ..])
            .assign(&placed.as_ndarray());

        Ok(out)
    }
}
