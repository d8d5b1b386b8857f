use crate::error::SearchError;
use crate::graph::GridGraph;
use crate::heap::IndexedMinHeap;
use crate::path::NO_PARENT;
use crate::traits::GridContext;

/// Counters collected during the most recent query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells extracted from the heap (finalized).
    pub expanded: usize,
    /// Successful relaxations (decrease-priority calls).
    pub relaxed: usize,
    /// Oracle evaluations.
    pub oracle_calls: usize,
}

// ---------------------------------------------------------------------------
// Marcher
// ---------------------------------------------------------------------------

/// Shortest-path engine for one grid size.
///
/// `Marcher` owns the heap, distance and parent buffers. They are sized once
/// at construction and reset at the start of every query, so a `Marcher` can
/// run any number of queries over same-sized contexts without reallocating
/// and without carrying state from one query into the next.
#[derive(Debug, Clone)]
pub struct Marcher {
    pub(crate) graph: GridGraph,
    pub(crate) heap: IndexedMinHeap,
    pub(crate) dist: Vec<f64>,
    pub(crate) parents: Vec<usize>,
    pub(crate) stats: SearchStats,
}

impl Marcher {
    /// Create an engine for `graph`.
    pub fn new(graph: GridGraph) -> Self {
        let len = graph.len();
        Self {
            graph,
            heap: IndexedMinHeap::with_capacity(len),
            dist: vec![f64::INFINITY; len],
            parents: vec![NO_PARENT; len],
            stats: SearchStats::default(),
        }
    }

    /// Create an engine sized for `ctx`.
    pub fn for_context<C: GridContext + ?Sized>(ctx: &C) -> Result<Self, SearchError> {
        Ok(Self::new(GridGraph::new(ctx.width(), ctx.height())?))
    }

    /// The grid this engine searches.
    #[inline]
    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    /// Distance of `cell` as left by the last query: final for extracted
    /// cells, tentative otherwise, `+inf` if never reached.
    pub fn distance_at(&self, cell: usize) -> f64 {
        self.dist.get(cell).copied().unwrap_or(f64::INFINITY)
    }

    /// Parent of `cell` from the last query, if it was ever relaxed.
    pub fn parent_of(&self, cell: usize) -> Option<usize> {
        match self.parents.get(cell) {
            Some(&p) if p != NO_PARENT => Some(p),
            _ => None,
        }
    }

    /// Counters from the last query.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    pub(crate) fn check_context<C: GridContext + ?Sized>(&self, ctx: &C) -> Result<(), SearchError> {
        let found = (ctx.width(), ctx.height());
        let expected = (self.graph.width(), self.graph.height());
        if found != expected {
            return Err(SearchError::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    /// Forget everything from the previous query.
    pub(crate) fn reset(&mut self) {
        self.heap.clear();
        self.dist.fill(f64::INFINITY);
        self.parents.fill(NO_PARENT);
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marcher_core::Image;

    #[test]
    fn for_context_sizes_graph() {
        let im = Image::new(7, 3);
        let m = Marcher::for_context(&im).unwrap();
        assert_eq!(m.graph().len(), 21);
        assert_eq!(m.dist.len(), 21);
        assert_eq!(m.heap.capacity(), 21);
    }

    #[test]
    fn for_context_rejects_empty_image() {
        let im = Image::new(0, 3);
        assert!(matches!(
            Marcher::for_context(&im),
            Err(SearchError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn check_context_reports_mismatch() {
        let m = Marcher::new(GridGraph::new(2, 2).unwrap());
        let err = m.check_context(&Image::new(3, 2)).unwrap_err();
        assert_eq!(
            err,
            SearchError::DimensionMismatch {
                expected: (2, 2),
                found: (3, 2)
            }
        );
    }

    #[test]
    fn fresh_engine_has_no_state() {
        let m = Marcher::new(GridGraph::new(2, 2).unwrap());
        assert_eq!(m.distance_at(3), f64::INFINITY);
        assert_eq!(m.parent_of(3), None);
        assert_eq!(m.distance_at(99), f64::INFINITY);
        assert_eq!(m.last_stats(), SearchStats::default());
    }
}
