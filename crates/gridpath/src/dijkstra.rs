use std::collections::BinaryHeap;

use gridpath_core::Point;

use crate::error::SolveError;
use crate::observer::SearchObserver;
use crate::path::Path;
use crate::search::{NodeRef, SearchState, check_endpoints};
use crate::traits::WeightedPather;

/// Shortest path from `start` to `goal` by uniform-cost search.
///
/// Nodes are finalized in non-decreasing order of distance; the search stops
/// as soon as `goal` is popped from the queue. Every finalized node other
/// than the endpoints is reported to `observer`.
pub fn dijkstra<P, O>(pather: &P, start: Point, goal: Point, observer: &mut O) -> Result<Path, SolveError>
where
    P: WeightedPather,
    O: SearchObserver + ?Sized,
{
    check_endpoints(pather, start, goal)?;

    let mut state = SearchState::new(pather.bounds(), start);
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        pos: start,
        f: 0,
        g: 0,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut finalized = 0usize;

    let found = 'search: loop {
        if observer.should_stop() {
            log::debug!("dijkstra {start} -> {goal} cancelled after {finalized} nodes");
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
        finalized += 1;
        log::trace!("dijkstra: finalized {cp} at {}", current.g);

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
            let tentative = current_g.saturating_add(pather.cost(cp, np));
            if state.relax(np, tentative, cp) {
                open.push(NodeRef {
                    pos: np,
                    f: tentative,
                    g: tentative,
                });
            }
        }
    };

    log::debug!("dijkstra {start} -> {goal}: found={found}, {finalized} nodes finalized");
    state.finish(found, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::observer::Silent;

    #[test]
    fn open_grid_corner_to_corner() {
        let g = Graph::build([], 3);
        let path = dijkstra(&g, Point::new(0, 0), Point::new(2, 2), &mut Silent).unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.len(), 5);
        assert_eq!(path.start(), Point::new(0, 0));
        assert_eq!(path.goal(), Point::new(2, 2));
        for w in path.as_slice().windows(2) {
            assert!(g.cost(w[0], w[1]).is_some());
        }
    }

    #[test]
    fn same_endpoint_is_single_node() {
        let g = Graph::build([], 3);
        let p = Point::new(1, 2);
        let path = dijkstra(&g, p, p, &mut Silent).unwrap();
        assert_eq!(path.as_slice(), &[p]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn blocked_endpoint_is_undefined() {
        let g = Graph::build([Point::new(1, 1)], 3);
        assert_eq!(
            dijkstra(&g, Point::new(1, 1), Point::new(2, 2), &mut Silent),
            Err(SolveError::UndefinedEndpoint(Point::new(1, 1)))
        );
        assert_eq!(
            dijkstra(&g, Point::new(0, 0), Point::new(5, 5), &mut Silent),
            Err(SolveError::UndefinedEndpoint(Point::new(5, 5)))
        );
    }

    #[test]
    fn wall_makes_goal_unreachable() {
        let wall = (0..3).map(|y| Point::new(1, y));
        let g = Graph::build(wall, 3);
        let err = dijkstra(&g, Point::new(0, 1), Point::new(2, 1), &mut Silent).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn observer_sees_non_endpoints_in_distance_order() {
        let g = Graph::build([], 4);
        let start = Point::new(0, 0);
        let goal = Point::new(3, 3);
        let mut seen = Vec::new();
        let mut record = |p: Point| seen.push(p);
        dijkstra(&g, start, goal, &mut record).unwrap();
        assert!(!seen.contains(&start));
        assert!(!seen.contains(&goal));
        let dists: Vec<i32> = seen.iter().map(|&p| p.x + p.y).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn weighted_edge_is_avoided() {
        let mut g = Graph::build([], 2);
        g.add_edge(Point::new(0, 0), Point::new(1, 0), 5).unwrap();
        let path = dijkstra(&g, Point::new(0, 0), Point::new(1, 0), &mut Silent).unwrap();
        assert_eq!(path.cost(), 3);
        assert_eq!(
            path.as_slice(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)]
        );
    }

    struct StopAfter(usize);

    impl SearchObserver for StopAfter {
        fn on_node_finalized(&mut self, _p: Point) {
            self.0 = self.0.saturating_sub(1);
        }

        fn should_stop(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn observer_can_cancel() {
        let g = Graph::build([], 5);
        let res = dijkstra(&g, Point::new(0, 0), Point::new(4, 4), &mut StopAfter(3));
        assert_eq!(res, Err(SolveError::Cancelled));
    }
}
