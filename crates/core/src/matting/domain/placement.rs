//! Where the image lands on the canvas, and at what size.
//!
//! All functions here are pure geometry on pixel counts.

use crate::shared::canvas_spec::CanvasSpec;

use super::mat_error::MatError;

/// Size and position of the (possibly rescaled) image on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Uniform factor applied to both image axes.
    pub scale: f64,
    pub height: u32,
    pub width: u32,
    /// Row of the image's top edge.
    pub top: u32,
    /// Column of the image's left edge.
    pub left: u32,
}

impl Placement {
    pub fn is_upscale(&self) -> bool {
        self.scale > 1.0
    }

    /// Whether the image must be resampled to reach its placed size.
    pub fn needs_resize(&self, image_height: u32, image_width: u32) -> bool {
        self.scale != 1.0 && (self.height, self.width) != (image_height, image_width)
    }
}

/// Rejects canvases with an empty side and borders that swallow the canvas.
pub fn validate_canvas(canvas: CanvasSpec, border: u32) -> Result<(u32, u32), MatError> {
    if canvas.height == 0 || canvas.width == 0 {
        return Err(MatError::InvalidCanvas {
            height: canvas.height,
            width: canvas.width,
        });
    }
    canvas.inner(border).ok_or(MatError::BorderTooLarge {
        border,
        height: canvas.height,
        width: canvas.width,
    })
}

/// Largest uniform scale that keeps the image `border` pixels inside the
/// canvas on the tighter axis.
pub fn fit_scale(
    image_height: u32,
    image_width: u32,
    canvas: CanvasSpec,
    border: u32,
) -> Result<f64, MatError> {
    if image_height == 0 || image_width == 0 {
        return Err(MatError::EmptyImage {
            height: image_height,
            width: image_width,
        });
    }
    let (inner_height, inner_width) = validate_canvas(canvas, border)?;
    let vertical = inner_height as f64 / image_height as f64;
    let horizontal = inner_width as f64 / image_width as f64;
    Ok(vertical.min(horizontal))
}

/// Image size after scaling, rounded half-to-even and at least one pixel.
pub fn scaled_size(image_height: u32, image_width: u32, scale: f64) -> (u32, u32) {
    if scale == 1.0 {
        return (image_height, image_width);
    }
    let side = |len: u32| ((len as f64 * scale).round_ties_even() as u32).max(1);
    (side(image_height), side(image_width))
}

/// Top-left corner that centers an image of the given size, flooring odd
/// remainders toward the top-left.
pub fn centered_offsets(canvas: CanvasSpec, height: u32, width: u32) -> (u32, u32) {
    (
        canvas.height.saturating_sub(height) / 2,
        canvas.width.saturating_sub(width) / 2,
    )
}

/// Raises the image from center by `round((top / canvas_width) * left)`.
///
/// The shift is tied to the horizontal margin and canvas width rather than
/// the vertical axis. It is a fixed gallery-mat heuristic and is kept as is.
pub fn bottom_weighted_top(top: u32, left: u32, canvas_width: u32) -> u32 {
    let shift = (top as f64 / canvas_width as f64 * left as f64).round_ties_even() as u32;
    top.saturating_sub(shift)
}

/// Computes the full placement of an `image_height x image_width` image.
pub fn plan(
    image_height: u32,
    image_width: u32,
    canvas: CanvasSpec,
    border: u32,
    bottom_weighted: bool,
) -> Result<Placement, MatError> {
    let scale = fit_scale(image_height, image_width, canvas, border)?;
    let (height, width) = scaled_size(image_height, image_width, scale);
    // Rounding can never push past the canvas, but the paste relies on it.
    let (height, width) = (height.min(canvas.height), width.min(canvas.width));

    let (mut top, left) = centered_offsets(canvas, height, width);
    if bottom_weighted {
        top = bottom_weighted_top(top, left, canvas.width);
    }

    Ok(Placement {
        scale,
        height,
        width,
        top,
        left,
    })
}
