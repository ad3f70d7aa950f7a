use std::collections::BinaryHeap;

use gridpath_core::Point;

use crate::error::SolveError;
use crate::observer::SearchObserver;
use crate::path::Path;
use crate::search::{NodeRef, SearchState, check_endpoints};
use crate::traits::AstarPather;

/// Shortest path from `start` to `goal` using A*.
///
/// The queue is keyed by `f = g + estimate(n, goal)`; `g` lives in the
/// distance table. The search stops when `goal` is popped. With a consistent
/// estimate (Manhattan distance on a unit grid) the result has the same cost
/// as [`dijkstra`](crate::dijkstra).
pub fn astar<P, O>(pather: &P, start: Point, goal: Point, observer: &mut O) -> Result<Path, SolveError>
where
    P: AstarPather,
    O: SearchObserver + ?Sized,
{
    check_endpoints(pather, start, goal)?;

    let mut state = SearchState::new(pather.bounds(), start);
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        pos: start,
        f: pather.estimate(start, goal),
        g: 0,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    let found = 'search: loop {
        if observer.should_stop() {
            log::debug!("astar {start} -> {goal} cancelled after {expanded} nodes");
            return Err(SolveError::Cancelled);
        }
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let cp = current.pos;
        // Skip stale entries.
        if !state.close(cp) {
            continue;
        }
        expanded += 1;
        log::trace!("astar: expanding {cp} (g={}, f={})", current.g, current.f);

        if cp == goal {
            break 'search true;
        }
        if cp != start {
            observer.on_node_finalized(cp);
        }

        let current_g = state.g(cp);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative_g = current_g.saturating_add(pather.cost(cp, np));
            if state.relax(np, tentative_g, cp) {
                open.push(NodeRef {
                    pos: np,
                    f: tentative_g.saturating_add(pather.estimate(np, goal)),
                    g: tentative_g,
                });
            }
        }
    };

    log::debug!("astar {start} -> {goal}: found={found}, {expanded} nodes expanded");
    state.finish(found, start, goal)
}
