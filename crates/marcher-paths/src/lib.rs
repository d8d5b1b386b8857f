//! Minimum-cost corner-to-corner paths over 4-connected pixel grids.
//!
//! The engine ([`Marcher`]) runs Dijkstra's algorithm from the top-left cell
//! to the bottom-right cell of a `width × height` grid. Step costs come from
//! a pluggable [`WeightOracle`], evaluated lazily one edge at a time while
//! the search runs.
//!
//! - [`IndexedMinHeap`] — binary heap with an inverse position map, giving
//!   O(log n) decrease-priority on any queued key.
//! - [`GridGraph`] — flat cell index ↔ coordinates, cardinal neighbours.
//! - [`Marcher`] — the relaxation loop; reports `Ok(None)` when the target
//!   is unreachable.
//! - [`MarchPath`] — the reconstructed path and its total cost.
//!
//! # Example
//! ```
//! use marcher_core::{Image, Rgb};
//! use marcher_paths::find_path;
//!
//! let im = Image::from_pixels(2, 2, vec![Rgb::WHITE; 4]).unwrap();
//! let oracle = |im: &Image, a: usize, b: usize| im.pixel(a).distance(im.pixel(b)) + 1.0;
//! let path = find_path(&im, &oracle).unwrap().expect("reachable");
//! assert_eq!(path.cost(), 2.0);
//! assert_eq!(path.len(), 3);
//! ```

mod dijkstra;
mod error;
mod graph;
mod heap;
mod marcher;
mod path;
mod traits;

pub use dijkstra::find_path;
pub use error::{HeapError, SearchError};
pub use graph::{GridGraph, Neighbors};
pub use heap::{HeapEntry, IndexedMinHeap};
pub use marcher::{Marcher, SearchStats};
pub use path::{MarchPath, NO_PARENT};
pub use traits::{GridContext, WeightOracle};
