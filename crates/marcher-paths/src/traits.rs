use marcher_core::Image;

use crate::graph::GridGraph;

/// Anything that describes a `width × height` grid of cells.
///
/// The engine sizes its graph from the context it is given.
pub trait GridContext {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
}

/// Cost of a single step between adjacent cells.
///
/// `from` and `to` are always grid-adjacent. The cost may be asymmetric and
/// must be non-negative; `f64::INFINITY` marks an impassable step. Negative
/// or NaN costs abort the query with
/// [`SearchError::InvalidCost`](crate::SearchError::InvalidCost).
pub trait WeightOracle<C: ?Sized> {
    fn cost(&self, ctx: &C, from: usize, to: usize) -> f64;
}

impl<C: ?Sized, F> WeightOracle<C> for F
where
    F: Fn(&C, usize, usize) -> f64,
{
    #[inline]
    fn cost(&self, ctx: &C, from: usize, to: usize) -> f64 {
        self(ctx, from, to)
    }
}

impl GridContext for Image {
    #[inline]
    fn width(&self) -> usize {
        Image::width(self)
    }

    #[inline]
    fn height(&self) -> usize {
        Image::height(self)
    }
}

impl GridContext for GridGraph {
    #[inline]
    fn width(&self) -> usize {
        GridGraph::width(self)
    }

    #[inline]
    fn height(&self) -> usize {
        GridGraph::height(self)
    }
}
