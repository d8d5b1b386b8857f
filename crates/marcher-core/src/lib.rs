//! **marcher-core** — core types for the pixel marcher.
//!
//! This crate provides the primitives shared by the path engine and the
//! application layer: grid geometry with a flattened cell index, RGB colour
//! samples, and an owned in-memory image. It performs no I/O.

pub mod color;
pub mod geom;
pub mod image;

pub use color::Rgb;
pub use geom::{Bounds, BoundsIter, Point};
pub use image::Image;
