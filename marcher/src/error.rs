use std::fmt;
use std::io;
use std::path::PathBuf;

use marcher_paths::SearchError;

/// Errors that end a marcher run.
#[derive(Debug)]
pub enum RunError {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// The image codec rejected the data.
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The image is too large for the encoder.
    TooLarge { width: usize, height: usize },
    /// The path engine failed.
    Search(SearchError),
    /// The bottom-right pixel cannot be reached from the top-left one.
    NoPath { image: PathBuf },
    /// The run report could not be serialized.
    Report(serde_json::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Image { path, source } => write!(f, "{}: {source}", path.display()),
            Self::TooLarge { width, height } => {
                write!(f, "image {width}x{height} is too large to encode")
            }
            Self::Search(e) => write!(f, "path search failed: {e}"),
            Self::NoPath { image } => write!(
                f,
                "{}: no path from the top-left to the bottom-right pixel",
                image.display()
            ),
            Self::Report(e) => write!(f, "cannot serialize report: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Search(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::TooLarge { .. } | Self::NoPath { .. } => None,
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        Self::Report(e)
    }
}
