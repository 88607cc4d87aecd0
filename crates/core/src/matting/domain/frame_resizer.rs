use crate::shared::frame::Frame;

/// Resamples a frame to new dimensions, keeping its channel count.
///
/// Implementations must keep samples in `[0, 255]`.
pub trait FrameResizer: Send {
    fn resize(
        &self,
        frame: &Frame,
        width: u32,
        height: u32,
    ) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>>;
}
