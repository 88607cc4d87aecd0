use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::matting::domain::border_compositor::BorderCompositor;
use crate::shared::canvas_spec::CanvasSpec;
use crate::shared::mat_settings::MatSettings;

/// Single-image matting pipeline: read → composite → write.
///
/// Holds no state between calls, so one instance can mat any number of
/// files in sequence.
pub struct MatImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    compositor: BorderCompositor,
    canvas: CanvasSpec,
    border: u32,
    settings: MatSettings,
}

impl MatImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        compositor: BorderCompositor,
        canvas: CanvasSpec,
        border: u32,
        settings: MatSettings,
    ) -> Self {
        Self {
            reader,
            writer,
            compositor,
            canvas,
            border,
            settings,
        }
    }

    /// Reads `input_path`, places it on the canvas, and writes the result.
    pub fn execute(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let image = self.reader.read(input_path)?;
        let matted = self
            .compositor
            .add_border(&image, self.canvas, self.border, &self.settings)?;
        self.writer
            .write(output_path, &matted, self.settings.output_quality)?;
        log::info!("Saved as {}", output_path.display());
        Ok(())
    }
}
