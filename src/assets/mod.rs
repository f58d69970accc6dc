pub mod export;
pub mod resize;
pub mod source;

use image::{ColorType, DynamicImage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::Result;

pub use export::save_png;
pub use resize::resize_exact;
pub use source::load_source;

/// Source image location used when no path is given
pub const DEFAULT_SOURCE_PATH: &str = "assets/source.jpg";

/// Directory the Capacitor asset tooling reads icon.png and splash.png from
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// One of the fixed-size PNGs generated from the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetTarget {
    Icon,
    Splash,
}

impl AssetTarget {
    /// All targets in the order they are written
    pub const ALL: [AssetTarget; 2] = [AssetTarget::Icon, AssetTarget::Splash];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetTarget::Icon => "icon.png",
            AssetTarget::Splash => "splash.png",
        }
    }

    /// Edge length of the square output in pixels
    pub fn size(self) -> u32 {
        match self {
            AssetTarget::Icon => 1024,
            AssetTarget::Splash => 2732,
        }
    }

    pub fn output_path(self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}

impl fmt::Display for AssetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
}

impl GenerationConfig {
    pub fn new(source_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH, DEFAULT_ASSETS_DIR)
    }
}

/// A PNG that was written to disk
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub target: AssetTarget,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source_path: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub source_color: ColorType,
    pub assets: Vec<GeneratedAsset>,
}

/// Pipeline stages reported to the progress callback
#[derive(Debug)]
pub enum GenerationEvent<'a> {
    Decoding { path: &'a Path },
    Decoded { width: u32, height: u32, color: ColorType },
    Resizing { target: AssetTarget },
    Writing { target: AssetTarget, path: &'a Path },
    Written { asset: &'a GeneratedAsset },
}

impl GenerationEvent<'_> {
    /// Number of progress steps a full run goes through
    pub const TOTAL_STEPS: u64 = 1 + 2 * AssetTarget::ALL.len() as u64;
}

pub struct AssetGenerator {
    config: GenerationConfig,
}

impl AssetGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Decode the source once, then resize and write every target in order
    ///
    /// Each target is resized from the original decoded bitmap. The first
    /// error stops the run; outputs written before it are left in place.
    pub fn generate<F>(&self, mut on_event: F) -> Result<GenerationReport>
    where
        F: FnMut(&GenerationEvent),
    {
        let source_path = &self.config.source_path;
        let output_dir = &self.config.output_dir;

        on_event(&GenerationEvent::Decoding { path: source_path });
        let source = load_source(source_path)?;

        let (source_width, source_height) = (source.width(), source.height());
        let source_color = source.color();
        on_event(&GenerationEvent::Decoded {
            width: source_width,
            height: source_height,
            color: source_color,
        });

        let mut assets = Vec::with_capacity(AssetTarget::ALL.len());

        for target in AssetTarget::ALL {
            let started = Instant::now();

            on_event(&GenerationEvent::Resizing { target });
            let rendered = render_target(&source, target)?;

            let path = target.output_path(output_dir);
            on_event(&GenerationEvent::Writing {
                target,
                path: &path,
            });
            let bytes = save_png(&rendered, &path)?;

            let asset = GeneratedAsset {
                target,
                width: rendered.width(),
                height: rendered.height(),
                path,
                bytes,
                duration: started.elapsed(),
            };
            on_event(&GenerationEvent::Written { asset: &asset });
            assets.push(asset);
        }

        Ok(GenerationReport {
            source_path: source_path.clone(),
            source_width,
            source_height,
            source_color,
            assets,
        })
    }
}

/// Stretch-resize the source to the target's square size
pub fn render_target(source: &DynamicImage, target: AssetTarget) -> Result<DynamicImage> {
    resize_exact(source, target.size(), target.size())
}

/// Generate `icon.png` and `splash.png` in `output_dir` from `source_path`
///
/// Prints a `Created <file> at <dir>` line for each file written.
pub fn generate_assets(source_path: &Path, output_dir: &Path) -> Result<GenerationReport> {
    let generator = AssetGenerator::new(GenerationConfig::new(source_path, output_dir));
    generator.generate(|event| {
        if let GenerationEvent::Written { asset } = event {
            println!("Created {} at {}", asset.target, output_dir.display());
        }
    })
}
