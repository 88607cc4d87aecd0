use ndarray::Axis;

use crate::color::domain::luminance::move_luminance;
use crate::shared::color::Color;
use crate::shared::frame::Frame;

use super::mat_error::MatError;

/// Mean color of an RGB or gray frame, truncated per channel.
///
/// Averages down the rows first, then across the columns. Gray frames
/// report their mean level on all three channels.
pub fn mean_color(frame: &Frame) -> Result<Color, MatError> {
    let channels = frame.channels();
    if channels != 1 && channels != 3 {
        return Err(MatError::UnsupportedChannels(channels));
    }
    let pixels = frame.width() as u64 * frame.height() as u64;
    if pixels == 0 {
        return Err(MatError::EmptyImage {
            height: frame.height(),
            width: frame.width(),
        });
    }

    let sums = frame
        .as_ndarray()
        .fold_axis(Axis(0), 0u64, |acc, &v| acc + v as u64)
        .fold_axis(Axis(0), 0u64, |acc, &v| acc + v);
    let mean = |c: usize| (sums[c] / pixels) as u8;

    Ok(if channels == 1 {
        Color::gray(mean(0))
    } else {
        Color::new(mean(0), mean(1), mean(2))
    })
}

/// Picks the mat color for `frame`.
///
/// A fraction of exactly 1 or 0 gives pure white or black without looking
/// at the image; anything between moves the image's mean color to that
/// luminance.
pub fn background_color(frame: &Frame, luminance: f64) -> Result<Color, MatError> {
    if luminance == 1.0 {
        return Ok(Color::WHITE);
    }
    if luminance == 0.0 {
        return Ok(Color::BLACK);
    }
    let mean = mean_color(frame)?;
    Ok(move_luminance(mean, luminance)?)
}

/// Per-pixel fill samples for a canvas with `channels` channels.
///
/// Gray canvases get the color's luminance.
pub fn fill_samples(color: Color, channels: u8) -> Result<Vec<u8>, MatError> {
    match channels {
        1 => Ok(vec![color.luminance()]),
        3 => Ok(color.channels().to_vec()),
        n => Err(MatError::UnsupportedChannels(n)),
    }
}
