//! Error types for the heap and the path engine.

use std::fmt;

/// Precondition violations reported by [`IndexedMinHeap`](crate::IndexedMinHeap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeapError {
    /// The key lies outside `[0, capacity)`.
    KeyOutOfRange { key: usize, capacity: usize },
    /// The key is already in the heap.
    DuplicateKey(usize),
    /// The key is not in the heap (never pushed, or already extracted).
    NotPresent(usize),
    /// A decrease was requested with a priority that is not strictly smaller.
    NotDecreasing {
        key: usize,
        current: f64,
        requested: f64,
    },
    /// NaN priorities cannot be ordered.
    InvalidPriority { key: usize, priority: f64 },
    /// Extraction from an empty heap.
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyOutOfRange { key, capacity } => {
                write!(f, "heap key {key} out of range (capacity {capacity})")
            }
            Self::DuplicateKey(key) => write!(f, "heap key {key} is already present"),
            Self::NotPresent(key) => write!(f, "heap key {key} is not present"),
            Self::NotDecreasing {
                key,
                current,
                requested,
            } => write!(
                f,
                "cannot decrease priority of key {key} from {current} to {requested}"
            ),
            Self::InvalidPriority { key, priority } => {
                write!(f, "invalid priority {priority} for heap key {key}")
            }
            Self::Empty => write!(f, "extract from an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Errors that terminate a path query.
///
/// An unreachable target is *not* an error; the engine reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The grid has zero width or zero height.
    EmptyGrid { width: usize, height: usize },
    /// `width * height` does not fit in a `usize`.
    GridTooLarge { width: usize, height: usize },
    /// The context handed to a [`Marcher`](crate::Marcher) does not match
    /// the grid it was built for.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// The oracle returned a negative or NaN cost.
    InvalidCost { from: usize, to: usize, cost: f64 },
    /// Following parent pointers from the target did not lead to the source.
    BrokenParentChain(usize),
    /// A heap precondition was violated.
    Heap(HeapError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid {width}x{height} has no cells")
            }
            Self::GridTooLarge { width, height } => {
                write!(f, "grid {width}x{height} is too large to index")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "context is {}x{} but the engine was built for {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::InvalidCost { from, to, cost } => write!(
                f,
                "oracle returned invalid cost {cost} for step {from} -> {to}"
            ),
            Self::BrokenParentChain(cell) => {
                write!(f, "parent chain broken at cell {cell}")
            }
            Self::Heap(e) => write!(f, "heap: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Heap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HeapError> for SearchError {
    fn from(e: HeapError) -> Self {
        Self::Heap(e)
    }
}
