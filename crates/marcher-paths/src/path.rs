use marcher_core::Point;

use crate::graph::GridGraph;
use crate::traits::WeightOracle;

/// Parent sentinel for cells that were never relaxed (and for the source).
pub const NO_PARENT: usize = usize::MAX;

/// A minimum-cost path from the source cell to the target cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMarchPath")
)]
pub struct MarchPath {
    cells: Vec<usize>,
    cost: f64,
}

/// Unchecked wire form of [`MarchPath`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMarchPath {
    cells: Vec<usize>,
    cost: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMarchPath> for MarchPath {
    type Error = String;

    fn try_from(raw: RawMarchPath) -> Result<Self, Self::Error> {
        if raw.cells.is_empty() {
            return Err("path must contain at least one cell".to_string());
        }
        if raw.cost.is_nan() || raw.cost < 0.0 {
            return Err(format!("path cost {} is not a non-negative number", raw.cost));
        }
        Ok(Self::new(raw.cells, raw.cost))
    }
}

impl MarchPath {
    pub(crate) fn new(cells: Vec<usize>, cost: f64) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Visited cells in order, source first, target last.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Total cost reported by the engine.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells on the path (at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least the source cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.cells[0]
    }

    #[inline]
    pub fn target(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<usize> {
        self.cells
    }

    /// The path in grid coordinates.
    pub fn points(&self, graph: &GridGraph) -> Vec<Point> {
        self.cells.iter().map(|&c| graph.point(c)).collect()
    }

    /// Whether every consecutive pair of cells is one cardinal step apart.
    pub fn is_contiguous(&self, graph: &GridGraph) -> bool {
        self.cells
            .windows(2)
            .all(|w| graph.is_adjacent(w[0], w[1]))
    }

    /// Re-evaluate the oracle along the path and sum the step costs.
    pub fn edge_cost_sum<C, O>(&self, ctx: &C, oracle: &O) -> f64
    where
        C: ?Sized,
        O: WeightOracle<C> + ?Sized,
    {
        self.cells
            .windows(2)
            .map(|w| oracle.cost(ctx, w[0], w[1]))
            .sum()
    }

    /// Flat `-1`-terminated layout: the cells followed by an end marker.
    pub fn to_terminated(&self) -> Vec<i64> {
        self.cells
            .iter()
            .map(|&c| c as i64)
            .chain(std::iter::once(-1))
            .collect()
    }
}

/// Walk parent pointers from `target` back to `source`.
///
/// Returns the cells in source-to-target order, or `Err(cell)` with the
/// cell whose parent is missing when the chain does not reach `source`.
/// The walk is bounded by `parents.len()` steps, so a corrupted map with a
/// cycle is reported rather than looping forever.
pub(crate) fn reconstruct(parents: &[usize], source: usize, target: usize) -> Result<Vec<usize>, usize> {
    let mut cells = vec![target];
    let mut cur = target;
    while cur != source {
        if cells.len() > parents.len() {
            return Err(cur);
        }
        let parent = parents.get(cur).copied().unwrap_or(NO_PARENT);
        if parent == NO_PARENT {
            return Err(cur);
        }
        cells.push(parent);
        cur = parent;
    }
    cells.reverse();
    Ok(cells)
}
