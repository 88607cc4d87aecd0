/// An RGB triple with every channel in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// BT.709 luma weights scaled by 10 000 so luminance stays in integer math.
const LUMA_WEIGHTS: [u32; 3] = [2126, 7152, 722];
const LUMA_SCALE: u32 = 10_000;

impl Color {
    pub const WHITE: Color = Color::gray(255);
    pub const BLACK: Color = Color::gray(0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceptual luminance (ITU-R BT.709), truncated to an integer.
    ///
    /// The weights sum to exactly one, so white maps to 255 and every gray
    /// maps to its own level.
    pub fn luminance(&self) -> u8 {
        let weighted: u32 = self
            .channels()
            .iter()
            .zip(LUMA_WEIGHTS)
            .map(|(&c, w)| c as u32 * w)
            .sum();
        (weighted / LUMA_SCALE) as u8
    }

    /// Adds `delta` to every channel, clamping each to `[0, 255]`.
    pub fn shifted(&self, delta: i32) -> Self {
        let shift = |c: u8| (c as i32 + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::white(Color::WHITE, 255)]
    #[case::black(Color::BLACK, 0)]
    #[case::mid_gray(Color::gray(128), 128)]
    #[case::pure_red(Color::new(255, 0, 0), 54)]
    #[case::pure_green(Color::new(0, 255, 0), 182)]
    #[case::pure_blue(Color::new(0, 0, 255), 18)]
    fn test_luminance(#[case] color: Color, #[case] expected: u8) {
        assert_eq!(color.luminance(), expected);
    }

    #[test]
    fn test_luminance_every_gray_is_its_own_level() {
        for v in 0..=255u8 {
            assert_eq!(Color::gray(v).luminance(), v);
        }
    }

    #[test]
    fn test_shifted_clamps_each_channel() {
        let c = Color::new(250, 100, 3);
        assert_eq!(c.shifted(10), Color::new(255, 110, 13));
        assert_eq!(c.shifted(-10), Color::new(240, 90, 0));
    }

    #[test]
    fn test_shifted_zero_is_identity() {
        let c = Color::new(12, 34, 56);
        assert_eq!(c.shifted(0), c);
    }
}
