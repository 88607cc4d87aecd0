use thiserror::Error;

use crate::color::domain::luminance::ColorAdjustError;

/// Failures while building a mat.
///
/// `InvalidCanvas` and `BorderTooLarge` are configuration problems: the
/// canvas/border combination leaves no room for the image.
#[derive(Error, Debug)]
pub enum MatError {
    #[error("canvas must be at least 1x1 pixels, got {height}x{width}")]
    InvalidCanvas { height: u32, width: u32 },
    #[error("border of {border}px leaves no room on a {height}x{width} canvas")]
    BorderTooLarge { border: u32, height: u32, width: u32 },
    #[error("image has no pixels ({height}x{width})")]
    EmptyImage { height: u32, width: u32 },
    #[error("unsupported channel count {0}: expected 1 (gray) or 3 (RGB)")]
    UnsupportedChannels(u8),
    #[error("background color: {0}")]
    Background(#[from] ColorAdjustError),
    #[error("resize to {width}x{height} failed: {source}")]
    Resize {
        width: u32,
        height: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MatError {
    /// True when the caller's canvas/border settings are at fault.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MatError::InvalidCanvas { .. } | MatError::BorderTooLarge { .. }
        )
    }
}
