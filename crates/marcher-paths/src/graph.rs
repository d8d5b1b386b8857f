use marcher_core::{Bounds, Point};

use crate::error::SearchError;

/// Offsets in the order neighbours are yielded: left, up, right, down.
///
/// The order only matters for tie-breaking between equal-cost paths.
const DIRS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// A 4-connected `width × height` grid graph over flat cell indices.
///
/// Stateless beyond its dimensions: it maps cells to and from coordinates
/// and enumerates in-bounds cardinal neighbours. The source cell is always
/// `0` and the target cell is always `len() - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGraph {
    bounds: Bounds,
}

impl GridGraph {
    /// Create the graph for a `width × height` grid.
    pub fn new(width: usize, height: usize) -> Result<Self, SearchError> {
        if width == 0 || height == 0 {
            return Err(SearchError::EmptyGrid { width, height });
        }
        // Neighbour arithmetic is done on i32 coordinates.
        let fits = width
            .checked_mul(height)
            .is_some_and(|n| n < usize::MAX)
            && i32::try_from(width).is_ok()
            && i32::try_from(height).is_ok();
        if !fits {
            return Err(SearchError::GridTooLarge { width, height });
        }
        Ok(Self {
            bounds: Bounds::new(width, height),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The fixed source cell, (0, 0).
    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    /// The fixed target cell, (width - 1, height - 1).
    #[inline]
    pub fn target(&self) -> usize {
        self.len() - 1
    }

    /// Flat index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    /// Coordinates of `cell`.
    #[inline]
    pub fn point(&self, cell: usize) -> Point {
        self.bounds.point_of(cell)
    }

    /// In-bounds cardinal neighbours of `cell`, left, up, right, down.
    pub fn neighbors(&self, cell: usize) -> Neighbors {
        let p = self.point(cell);
        let mut buf = [0usize; 4];
        let mut len = 0;
        for (dx, dy) in DIRS {
            if let Some(n) = self.index(p.shift(dx, dy)) {
                buf[len] = n;
                len += 1;
            }
        }
        Neighbors { buf, len, next: 0 }
    }

    /// Whether `a` and `b` are distinct cells one cardinal step apart.
    #[inline]
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a < self.len() && b < self.len() && self.point(a).manhattan(self.point(b)) == 1
    }
}

/// Iterator over the (at most four) neighbours of a cell.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: [usize; 4],
    len: usize,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.next >= self.len {
            return None;
        }
        let n = self.buf[self.next];
        self.next += 1;
        Some(n)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.len - self.next;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grids() {
        assert_eq!(
            GridGraph::new(0, 3),
            Err(SearchError::EmptyGrid {
                width: 0,
                height: 3
            })
        );
        assert!(GridGraph::new(4, 0).is_err());
    }

    #[test]
    fn rejects_oversized_grids() {
        assert!(matches!(
            GridGraph::new(usize::MAX, 2),
            Err(SearchError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn corners() {
        let g = GridGraph::new(4, 3).unwrap();
        assert_eq!(g.source(), 0);
        assert_eq!(g.target(), 11);
        assert_eq!(g.point(g.target()), Point::new(3, 2));
        let single = GridGraph::new(1, 1).unwrap();
        assert_eq!(single.source(), single.target());
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        let g = GridGraph::new(3, 3).unwrap();
        let n: Vec<usize> = g.neighbors(4).collect();
        assert_eq!(n, vec![3, 1, 5, 7]);
    }

    #[test]
    fn corner_and_edge_cells() {
        let g = GridGraph::new(3, 2).unwrap();
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(g.neighbors(5).collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(g.neighbors(1).len(), 3);
    }

    #[test]
    fn no_neighbors_on_single_cell() {
        let g = GridGraph::new(1, 1).unwrap();
        assert_eq!(g.neighbors(0).count(), 0);
    }

    #[test]
    fn single_row_does_not_wrap() {
        let g = GridGraph::new(5, 1).unwrap();
        assert_eq!(g.neighbors(4).collect::<Vec<_>>(), vec![3]);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn neighbors_are_adjacent_and_symmetric() {
        let g = GridGraph::new(6, 4).unwrap();
        for c in 0..g.len() {
            for n in g.neighbors(c) {
                assert!(g.is_adjacent(c, n));
                assert!(g.neighbors(n).any(|m| m == c));
            }
        }
        assert!(!g.is_adjacent(0, 0));
        assert!(!g.is_adjacent(5, 6)); // end of row 0 and start of row 1
    }
}
