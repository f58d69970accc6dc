// Library exports for reuse by build scripts and other tooling
pub mod assets;
pub mod cli;
pub mod error;
pub mod json_output;
pub mod utils;

// Re-export commonly used types
pub use assets::{
    generate_assets, AssetGenerator, AssetTarget, GeneratedAsset, GenerationConfig,
    GenerationEvent, GenerationReport,
};
pub use error::AssetError;
pub use json_output::JsonMessage;
