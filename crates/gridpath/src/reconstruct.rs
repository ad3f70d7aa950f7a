//! Predecessor table and path reconstruction, shared by every search.

use gridpath_core::{Point, Range};

/// How a node was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The search root (the start node).
    Root,
    /// Reached through this neighbor.
    Node(Point),
}

/// Predecessor table: node → the node its best known distance came from.
///
/// Scoped to one search; cells never reached have no entry.
#[derive(Debug, Clone)]
pub struct Predecessors {
    rng: Range,
    links: Vec<Option<Parent>>,
}

impl Predecessors {
    /// An empty table over `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            links: vec![None; rng.len()],
        }
    }

    /// Record how `p` was reached. Points outside the table are ignored.
    pub fn set(&mut self, p: Point, parent: Parent) {
        if let Some(i) = self.rng.index_of(p) {
            self.links[i] = Some(parent);
        }
    }

    /// How `p` was reached, if it was.
    pub fn get(&self, p: Point) -> Option<Parent> {
        let i = self.rng.index_of(p)?;
        self.links[i]
    }
}

/// Walk back from `goal` to the root and return the nodes from `start` to
/// `goal` inclusive.
///
/// Returns `None` when the chain does not begin at `start`: `goal` was never
/// reached, a link is missing, or the chain loops.
pub fn reconstruct(preds: &Predecessors, start: Point, goal: Point) -> Option<Vec<Point>> {
    let mut path = Vec::new();
    let mut cur = goal;
    loop {
        // A simple path visits every cell at most once.
        if path.len() >= preds.links.len() {
            return None;
        }
        path.push(cur);
        match preds.get(cur)? {
            Parent::Root => break,
            Parent::Node(prev) => cur = prev,
        }
    }
    path.reverse();
    if path.first() != Some(&start) {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(rng: Range, steps: &[(i32, i32)]) -> Predecessors {
        let mut preds = Predecessors::new(rng);
        let mut prev = None;
        for &(x, y) in steps {
            let p = Point::new(x, y);
            preds.set(p, prev.map_or(Parent::Root, Parent::Node));
            prev = Some(p);
        }
        preds
    }

    #[test]
    fn walks_back_to_root() {
        let preds = chain(Range::square(3), &[(0, 0), (1, 0), (1, 1), (2, 1)]);
        let path = reconstruct(&preds, Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn start_equals_goal() {
        let preds = chain(Range::square(3), &[(1, 1)]);
        let p = Point::new(1, 1);
        assert_eq!(reconstruct(&preds, p, p), Some(vec![p]));
    }

    #[test]
    fn unreached_goal_is_empty() {
        let preds = chain(Range::square(3), &[(0, 0), (1, 0)]);
        assert_eq!(reconstruct(&preds, Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn chain_rooted_elsewhere_is_empty() {
        let preds = chain(Range::square(3), &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(reconstruct(&preds, Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn cycle_is_rejected() {
        let mut preds = Predecessors::new(Range::square(2));
        preds.set(Point::new(0, 0), Parent::Node(Point::new(1, 0)));
        preds.set(Point::new(1, 0), Parent::Node(Point::new(0, 0)));
        assert_eq!(reconstruct(&preds, Point::new(0, 0), Point::new(1, 0)), None);
    }
}
