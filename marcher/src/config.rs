use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::weights::Weight;

/// Prefix of the default output file name.
pub const OUTPUT_PREFIX: &str = "Path-";

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Image to march across.
    pub image: PathBuf,
    /// Step-cost function.
    pub weight: Weight,
    /// Where the visualization is written.
    pub output: PathBuf,
}

impl RunConfig {
    /// Configuration with the default output path for `image`.
    pub fn new(image: impl Into<PathBuf>, weight: Weight) -> Self {
        let image = image.into();
        let output = default_output(&image);
        Self {
            image,
            weight,
            output,
        }
    }

    /// Override the output path (builder).
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self::new(&cli.image, cli.mode);
        match &cli.output {
            Some(out) => config.with_output(out),
            None => config,
        }
    }
}

/// `Path-<file name of image>`, relative to the current directory.
pub fn default_output(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.ppm".to_string());
    PathBuf::from(format!("{OUTPUT_PREFIX}{name}"))
}
