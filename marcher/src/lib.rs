//! Marcher: find the least-energy path across an image.
//!
//! The march starts at the top-left pixel and ends at the bottom-right one,
//! stepping between 4-connected neighbours. Step costs come from one of the
//! [`Weight`] functions; the search itself lives in `marcher-paths`.

pub mod cli;
pub mod config;
pub mod error;
pub mod imageio;
pub mod render;
pub mod run;
pub mod weights;

pub use cli::Cli;
pub use config::{RunConfig, default_output};
pub use error::RunError;
pub use run::{Report, march, run};
pub use weights::Weight;
