use log::{debug, trace};

use crate::error::SearchError;
use crate::heap::HeapEntry;
use crate::marcher::Marcher;
use crate::path::{MarchPath, reconstruct};
use crate::traits::{GridContext, WeightOracle};

impl Marcher {
    /// Find a minimum-cost path from cell 0 to the last cell of the grid.
    ///
    /// Step costs come from `oracle`, evaluated lazily for each edge leaving
    /// a newly finalized cell. Returns `Ok(None)` when the target cannot be
    /// reached (every remaining cell sits at infinite distance).
    pub fn find_path<C, O>(&mut self, ctx: &C, oracle: &O) -> Result<Option<MarchPath>, SearchError>
    where
        C: GridContext + ?Sized,
        O: WeightOracle<C> + ?Sized,
    {
        self.check_context(ctx)?;
        self.reset();

        let source = self.graph.source();
        let target = self.graph.target();
        debug!(
            "march over {}x{} grid: {} -> {}",
            self.graph.width(),
            self.graph.height(),
            source,
            target
        );

        for cell in 0..self.graph.len() {
            let priority = if cell == source { 0.0 } else { f64::INFINITY };
            self.heap.push(cell, priority)?;
        }
        self.dist[source] = 0.0;

        while !self.heap.is_empty() {
            let HeapEntry { key: u, priority: d } = self.heap.extract_min()?;

            // Everything still queued is at infinite distance too.
            if !d.is_finite() {
                break;
            }
            self.stats.expanded += 1;

            if u == target {
                let cells = reconstruct(&self.parents, source, target)
                    .map_err(SearchError::BrokenParentChain)?;
                debug!(
                    "reached target at cost {d} ({} cells, {:?})",
                    cells.len(),
                    self.stats
                );
                return Ok(Some(MarchPath::new(cells, d)));
            }

            trace!("expand {} at {d}", self.graph.point(u));

            for v in self.graph.neighbors(u) {
                // Absent means finalized; its distance cannot improve.
                let Some(current) = self.heap.priority(v) else {
                    continue;
                };

                let w = oracle.cost(ctx, u, v);
                self.stats.oracle_calls += 1;
                if w.is_nan() || w < 0.0 {
                    return Err(SearchError::InvalidCost {
                        from: u,
                        to: v,
                        cost: w,
                    });
                }

                let candidate = d + w;
                if candidate < current {
                    self.heap.decrease_priority(v, candidate)?;
                    self.dist[v] = candidate;
                    self.parents[v] = u;
                    self.stats.relaxed += 1;
                }
            }
        }

        debug!(
            "target {} unreachable after {} expansions",
            self.graph.point(target),
            self.stats.expanded
        );
        Ok(None)
    }
}

/// Run a single query with a freshly allocated [`Marcher`] sized for `ctx`.
pub fn find_path<C, O>(ctx: &C, oracle: &O) -> Result<Option<MarchPath>, SearchError>
where
    C: GridContext + ?Sized,
    O: WeightOracle<C> + ?Sized,
{
    Marcher::for_context(ctx)?.find_path(ctx, oracle)
}
