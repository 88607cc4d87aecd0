use super::constants::{DEFAULT_BACKGROUND_LUMINANCE, DEFAULT_OUTPUT_QUALITY};

/// Knobs shared by every matting run.
///
/// `verbose` only selects how chatty the caller's logger is; the
/// compositor never looks at it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatSettings {
    /// 0 gives a black mat, 1 a white one; anything between tints the
    /// image's mean color to that luminance.
    pub background_luminance: f64,
    /// Nudge the image upward from dead center.
    pub bottom_weighted: bool,
    /// Encoder quality (1-100) for lossy output formats.
    pub output_quality: u8,
    pub verbose: bool,
}

impl Default for MatSettings {
    fn default() -> Self {
        Self {
            background_luminance: DEFAULT_BACKGROUND_LUMINANCE,
            bottom_weighted: false,
            output_quality: DEFAULT_OUTPUT_QUALITY,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let settings = MatSettings::default();
        assert_relative_eq!(settings.background_luminance, 0.85);
        assert!(!settings.bottom_weighted);
        assert_eq!(settings.output_quality, 95);
        assert!(!settings.verbose);
    }
}
