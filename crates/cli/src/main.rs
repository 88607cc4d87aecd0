use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use matte_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use matte_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use matte_core::matting::domain::border_compositor::BorderCompositor;
use matte_core::matting::domain::placement::validate_canvas;
use matte_core::matting::infrastructure::image_resizer::ImageResizer;
use matte_core::pipeline::mat_image_use_case::MatImageUseCase;
use matte_core::pipeline::output_naming::output_path;
use matte_core::shared::canvas_spec::CanvasSpec;
use matte_core::shared::constants::{
    DEFAULT_BACKGROUND_LUMINANCE, DEFAULT_OUTPUT_QUALITY, IMAGE_EXTENSIONS,
};
use matte_core::shared::mat_settings::MatSettings;

/// Place photographs on a fixed-size, solid-color canvas.
#[derive(Parser)]
#[command(name = "matte")]
struct Cli {
    /// Border thickness in pixels.
    border: u32,

    /// Height of the background canvas in pixels.
    canvas_height: u32,

    /// Width of the background canvas in pixels.
    canvas_width: u32,

    /// Images to process.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Name for the output file (single input only).
    #[arg(long)]
    output_filename: Option<String>,

    /// Directory for output files.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Background luminance (0.0 = black, 1.0 = white).
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_LUMINANCE)]
    bg_luminance: f64,

    /// Raise the image slightly above center.
    #[arg(long)]
    bottom_weighted: bool,

    /// JPEG quality of the output (1-100).
    #[arg(long, default_value_t = DEFAULT_OUTPUT_QUALITY)]
    quality: u8,

    /// Print progress messages.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let settings = settings_from(&cli);
    init_logging(settings.verbose);

    match run(&cli, settings) {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("{failed} input(s) failed");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn settings_from(cli: &Cli) -> MatSettings {
    MatSettings {
        background_luminance: cli.bg_luminance,
        bottom_weighted: cli.bottom_weighted,
        output_quality: cli.quality,
        verbose: cli.verbose,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Mats every input in turn, returning how many failed.
fn run(cli: &Cli, settings: MatSettings) -> Result<usize, Box<dyn std::error::Error>> {
    validate(cli)?;

    let canvas = CanvasSpec::new(cli.canvas_height, cli.canvas_width);
    let use_case = MatImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        BorderCompositor::new(Box::new(ImageResizer::default())),
        canvas,
        cli.border,
        settings,
    );

    let mut failed = 0;
    for input in &cli.inputs {
        let output = output_path(input, &cli.output_dir, cli.output_filename.as_deref());
        if let Err(e) = use_case.execute(input, &output) {
            eprintln!("Error: {}: {e}", input.display());
            failed += 1;
        }
    }
    Ok(failed)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    validate_canvas(CanvasSpec::new(cli.canvas_height, cli.canvas_width), cli.border)?;
    if !(0.0..=1.0).contains(&cli.bg_luminance) {
        return Err(format!(
            "Background luminance must be between 0.0 and 1.0, got {}",
            cli.bg_luminance
        )
        .into());
    }
    if !(1..=100).contains(&cli.quality) {
        return Err(format!("Quality must be between 1 and 100, got {}", cli.quality).into());
    }
    if cli.output_filename.is_some() && cli.inputs.len() > 1 {
        return Err("--output-filename can only be used with a single input".into());
    }
    for input in cli.inputs.iter().filter(|p| !is_image(p)) {
        log::warn!("{} does not have a known image extension", input.display());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
