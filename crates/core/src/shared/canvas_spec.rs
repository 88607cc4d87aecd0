/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpec {
    pub height: u32,
    pub width: u32,
}

impl CanvasSpec {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Area left for the image once `border` is taken from both sides of
    /// each axis, as `(height, width)`. `None` if either side would be empty.
    pub fn inner(&self, border: u32) -> Option<(u32, u32)> {
        let margin = border.checked_mul(2)?;
        let height = self.height.checked_sub(margin).filter(|&h| h > 0)?;
        let width = self.width.checked_sub(margin).filter(|&w| w > 0)?;
        Some((height, width))
    }
}
