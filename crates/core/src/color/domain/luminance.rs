use std::cmp::Ordering;

use thiserror::Error;

use crate::shared::color::Color;

/// Largest uniform shift that can matter: beyond it every channel is clamped.
const MAX_SHIFT: i32 = 255;

#[derive(Error, Debug, PartialEq)]
pub enum ColorAdjustError {
    #[error("luminance fraction must be between 0.0 and 1.0, got {0}")]
    OutOfRange(f64),
    #[error("could not move {color:?} to luminance {target}")]
    Convergence { color: Color, target: u8 },
}

/// Converts a `[0, 1]` brightness fraction into a target luma level.
pub fn target_luminance(fraction: f64) -> Result<u8, ColorAdjustError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(ColorAdjustError::OutOfRange(fraction));
    }
    Ok((fraction * 255.0).round() as u8)
}

/// Brightens or darkens `color` uniformly until its perceptual luminance
/// equals `round(fraction * 255)`.
///
/// Every channel moves by the same amount and is clamped to `[0, 255]`.
/// The smallest such shift is returned, which is what stepping one level
/// at a time would find. Luminance is monotone in the shift and never
/// grows by more than one level per step, so a bisection over the 256
/// possible shifts always lands exactly on the target.
pub fn move_luminance(color: Color, fraction: f64) -> Result<Color, ColorAdjustError> {
    let target = target_luminance(fraction)?;

    let adjusted = match color.luminance().cmp(&target) {
        Ordering::Equal => return Ok(color),
        Ordering::Less => {
            let shift = smallest_shift(|d| color.shifted(d).luminance() >= target);
            color.shifted(shift)
        }
        Ordering::Greater => {
            let shift = smallest_shift(|d| color.shifted(-d).luminance() <= target);
            color.shifted(-shift)
        }
    };

    if adjusted.luminance() != target {
        return Err(ColorAdjustError::Convergence { color, target });
    }
    log::debug!("Moved {color:?} to {adjusted:?} (luminance {target})");
    Ok(adjusted)
}

/// Smallest shift in `0..=MAX_SHIFT` for which `reached` holds.
///
/// `reached` must be monotone and true at `MAX_SHIFT`.
fn smallest_shift(reached: impl Fn(i32) -> bool) -> i32 {
    let (mut lo, mut hi) = (0, MAX_SHIFT);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if reached(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
