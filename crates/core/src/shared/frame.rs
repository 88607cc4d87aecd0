use ndarray::{ArrayView3, ArrayViewMut3};

/// A decoded image: contiguous 8-bit samples in row-major order, laid out
/// as `(height, width, channels)`.
///
/// Every frame carries an explicit channel axis, so single-channel images
/// have `channels == 1` rather than a missing dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Creates a frame where every pixel holds `fill`.
    ///
    /// `fill.len()` becomes the channel count.
    pub fn filled(width: u32, height: u32, fill: &[u8]) -> Self {
        let pixels = (width as usize) * (height as usize);
        let data = fill.repeat(pixels);
        Self::new(data, width, height, fill.len() as u8)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Samples of the pixel at `(row, col)`.
    pub fn pixel(&self, row: u32, col: u32) -> &[u8] {
        let channels = self.channels as usize;
        let start = ((row as usize) * (self.width as usize) + col as usize) * channels;
        &self.data[start..start + channels]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x3
        Frame::new(data, 2, 2, 3);
    }

    #[test]
    fn test_filled_repeats_fill_for_every_pixel() {
        let frame = Frame::filled(3, 2, &[10, 20, 30]);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data().len(), 18);
        assert!(frame.data().chunks(3).all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn test_filled_single_channel() {
        let frame = Frame::filled(4, 4, &[200]);
        assert_eq!(frame.channels(), 1);
        assert!(frame.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn test_pixel_access() {
        // 2x2 RGB: set pixel (row=1, col=0) to red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let frame = Frame::new(data, 2, 2, 3);
        assert_eq!(frame.pixel(1, 0), &[255, 0, 0]);
        assert_eq!(frame.pixel(0, 1), &[0, 0, 0]);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let frame = Frame::new(vec![0u8; 24], 4, 2, 3);
        assert_eq!(frame.as_ndarray().shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_mut_modification() {
        let mut frame = Frame::new(vec![0u8; 12], 2, 2, 3);
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[0, 1, 2]] = 128; // row=0, col=1, B channel
        }
        assert_eq!(frame.pixel(0, 1), &[0, 0, 128]);
    }
}
