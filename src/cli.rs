use clap::Parser;
use std::path::PathBuf;

use crate::assets::{DEFAULT_ASSETS_DIR, DEFAULT_SOURCE_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "asset-generator",
    about = "Generate the app icon and splash screen PNGs from a single source image",
    long_about = "
Capacitor Asset Generator

Resizes one source image into the two fixed-size PNGs a Capacitor app build
expects, and writes them into the assets directory:

  icon.png     1024x1024
  splash.png   2732x2732

Both files are stretched from the original image with a Lanczos3 filter.
The aspect ratio is not preserved and nothing is cropped or padded. Existing
files are overwritten. The output directory must already exist.

Example Usage:
  # Use the default paths (assets/source.jpg -> assets/)
  asset-generator

  # Explicit source and output directory
  asset-generator -i ~/Design/logo.png -o ./assets

  # Machine-readable progress for wrapping scripts
  asset-generator -i ~/Design/logo.png -o ./assets --json-progress"
)]
pub struct Args {
    /// Source image (format detected from the file contents)
    #[arg(
        short = 'i',
        long = "source",
        value_name = "FILE",
        default_value = DEFAULT_SOURCE_PATH
    )]
    pub source_path: PathBuf,

    /// Existing directory to write icon.png and splash.png into
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_ASSETS_DIR
    )]
    pub output_dir: PathBuf,

    /// Enable verbose output with detailed progress information
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Emit progress and results as JSON lines instead of styled text
    #[arg(long = "json-progress")]
    pub json_progress: bool,
}

impl Args {
    /// Verbose lines would corrupt the JSON stream, so JSON mode wins
    pub fn verbose_output(&self) -> bool {
        self.verbose && !self.json_progress
    }
}
