//! Per-call search tables shared by Dijkstra and A*.

use std::cmp::Ordering;

use gridpath_core::{Point, Range};

use crate::error::SolveError;
use crate::graph::UNREACHABLE;
use crate::path::Path;
use crate::reconstruct::{Parent, Predecessors, reconstruct};
use crate::traits::Pather;

/// Priority-queue entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first.
///
/// Ties on `f` prefer the larger `g` (the entry closer to the goal), then the
/// smaller point in row-major order, so the pop order is a pure function of
/// the graph and the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then(self.g.cmp(&other.g))
            .then(other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance table, finalized flags and predecessor table for one search.
pub(crate) struct SearchState {
    rng: Range,
    dist: Vec<i32>,
    closed: Vec<bool>,
    preds: Predecessors,
}

impl SearchState {
    /// Fresh tables over `rng` with `start` at distance 0.
    pub(crate) fn new(rng: Range, start: Point) -> Self {
        let mut state = Self {
            rng,
            dist: vec![UNREACHABLE; rng.len()],
            closed: vec![false; rng.len()],
            preds: Predecessors::new(rng),
        };
        if let Some(i) = rng.index_of(start) {
            state.dist[i] = 0;
        }
        state.preds.set(start, Parent::Root);
        state
    }

    /// Best known cost-so-far to `p`.
    #[inline]
    pub(crate) fn g(&self, p: Point) -> i32 {
        self.rng.index_of(p).map_or(UNREACHABLE, |i| self.dist[i])
    }

    /// Mark `p` final. Returns `false` for a stale queue entry (`p` was
    /// already final).
    pub(crate) fn close(&mut self, p: Point) -> bool {
        match self.rng.index_of(p) {
            Some(i) if !self.closed[i] => {
                self.closed[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Record `tentative` as the distance to `to` through `from` if it
    /// improves on the current one. Returns whether it did.
    pub(crate) fn relax(&mut self, to: Point, tentative: i32, from: Point) -> bool {
        let Some(i) = self.rng.index_of(to) else {
            return false;
        };
        if self.closed[i] || tentative >= self.dist[i] {
            return false;
        }
        self.dist[i] = tentative;
        self.preds.set(to, Parent::Node(from));
        true
    }

    /// Turn the outcome of the main loop into a result.
    pub(crate) fn finish(self, found: bool, start: Point, goal: Point) -> Result<Path, SolveError> {
        if !found {
            return Err(SolveError::Unreachable { start, goal });
        }
        match reconstruct(&self.preds, start, goal) {
            Some(nodes) => Ok(Path::new(nodes, self.g(goal))),
            None => Err(SolveError::InternalInconsistency { start, goal }),
        }
    }
}

/// Fail with [`SolveError::UndefinedEndpoint`] unless both endpoints are
/// nodes.
pub(crate) fn check_endpoints<P: Pather>(pather: &P, start: Point, goal: Point) -> Result<(), SolveError> {
    for p in [start, goal] {
        if !pather.contains(p) {
            return Err(SolveError::UndefinedEndpoint(p));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_f_first() {
        let mut open = BinaryHeap::new();
        for (x, f) in [(0, 5), (1, 2), (2, 9), (3, 2)] {
            open.push(NodeRef {
                pos: Point::new(x, 0),
                f,
                g: 0,
            });
        }
        let order: Vec<i32> = std::iter::from_fn(|| open.pop()).map(|n| n.pos.x).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn ties_prefer_larger_g() {
        let mut open = BinaryHeap::new();
        open.push(NodeRef { pos: Point::new(0, 0), f: 4, g: 1 });
        open.push(NodeRef { pos: Point::new(1, 0), f: 4, g: 3 });
        assert_eq!(open.pop().map(|n| n.pos), Some(Point::new(1, 0)));
    }

    #[test]
    fn relax_only_improves() {
        let start = Point::ZERO;
        let mut state = SearchState::new(Range::square(3), start);
        let p = Point::new(1, 0);
        assert_eq!(state.g(p), UNREACHABLE);
        assert!(state.relax(p, 3, start));
        assert!(!state.relax(p, 3, start));
        assert!(state.relax(p, 1, start));
        assert_eq!(state.g(p), 1);
        assert!(state.close(p));
        assert!(!state.close(p));
        assert!(!state.relax(p, 0, start));
    }

    #[test]
    fn unfinished_search_is_unreachable() {
        let state = SearchState::new(Range::square(2), Point::ZERO);
        let goal = Point::new(1, 1);
        assert_eq!(
            state.finish(false, Point::ZERO, goal),
            Err(SolveError::Unreachable {
                start: Point::ZERO,
                goal
            })
        );
    }

    #[test]
    fn goal_without_chain_is_inconsistent() {
        let state = SearchState::new(Range::square(2), Point::ZERO);
        let goal = Point::new(1, 1);
        assert_eq!(
            state.finish(true, Point::ZERO, goal),
            Err(SolveError::InternalInconsistency {
                start: Point::ZERO,
                goal
            })
        );
    }
}
