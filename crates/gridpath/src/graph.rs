//! Grid-to-graph conversion.

use std::fmt;

use gridpath_core::{Point, Range};

use crate::distance::manhattan;
use crate::error::GraphError;
use crate::neighbors::Neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of every edge produced by [`Graph::build`].
pub const UNIT_COST: i32 = 1;

/// Sentinel cost meaning "no such edge".
pub const UNREACHABLE: i32 = i32::MAX;

/// A directed half of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Neighbor at the far end.
    pub to: Point,
    /// Positive cost of the step.
    pub cost: i32,
}

/// Undirected, positively weighted graph over the free cells of a grid.
///
/// Nodes are stored in a flat row-major table over the grid rectangle;
/// `None` marks a cell that is not a node. Each node keeps its adjacency in
/// insertion order, which makes neighbor enumeration (and therefore every
/// search) deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    rng: Range,
    adjacency: Vec<Option<Vec<Edge>>>,
    nodes: usize,
    edges: usize,
}

impl Graph {
    /// An empty graph (no nodes) over `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            adjacency: vec![None; rng.len()],
            nodes: 0,
            edges: 0,
        }
    }

    /// Build the graph of a `size` × `size` grid.
    ///
    /// Every cell not listed in `blocked` becomes a node, linked with cost
    /// [`UNIT_COST`] to each of its in-bounds, free orthogonal neighbors.
    /// Blocked coordinates outside the grid are ignored.
    pub fn build<I>(blocked: I, size: i32) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let rng = Range::square(size);
        let mut free = vec![true; rng.len()];
        for p in blocked {
            if let Some(i) = rng.index_of(p) {
                free[i] = false;
            }
        }
        let is_free = |p: Point| rng.index_of(p).is_some_and(|i| free[i]);

        let mut graph = Self::new(rng);
        for p in rng {
            if is_free(p) {
                graph.insert_node(p);
            }
        }

        // Each node fills its own list in cardinal order; the reverse half
        // is written when the neighbor takes its turn.
        let mut nb = Neighbors::new();
        for p in rng {
            let Some(i) = rng.index_of(p) else {
                continue;
            };
            let Some(adj) = graph.adjacency[i].as_mut() else {
                continue;
            };
            for &n in nb.cardinal(p, is_free) {
                adj.push(Edge {
                    to: n,
                    cost: UNIT_COST,
                });
                if p < n {
                    graph.edges += 1;
                }
            }
        }

        log::debug!(
            "built graph over {}: {} nodes, {} edges",
            rng,
            graph.nodes,
            graph.edges
        );
        graph
    }

    /// Add `p` as a node. Returns `false` if it already was one.
    pub fn add_node(&mut self, p: Point) -> Result<bool, GraphError> {
        if !self.rng.contains(p) {
            return Err(GraphError::OutOfBounds(p));
        }
        Ok(self.insert_node(p))
    }

    /// Add (or re-weight) the undirected edge `a - b`.
    ///
    /// Both endpoints must already be nodes, one orthogonal step apart, and
    /// `cost` must be positive. Re-adding an existing edge replaces its cost
    /// in both directions.
    pub fn add_edge(&mut self, a: Point, b: Point, cost: i32) -> Result<(), GraphError> {
        for p in [a, b] {
            if !self.contains(p) {
                return Err(GraphError::MissingNode(p));
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !a.is_adjacent(b) {
            return Err(GraphError::NotAdjacent { from: a, to: b });
        }
        if cost <= 0 {
            return Err(GraphError::InvalidCost {
                from: a,
                to: b,
                cost,
            });
        }
        self.link(a, b, cost);
        Ok(())
    }

    /// The grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Whether `p` is a node.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.edges_of(p).is_some()
    }

    /// Outgoing edges of `p`, empty when `p` is not a node.
    pub fn neighbors(&self, p: Point) -> &[Edge] {
        self.edges_of(p).unwrap_or(&[])
    }

    /// Cost of the edge `a - b`, if there is one.
    pub fn cost(&self, a: Point, b: Point) -> Option<i32> {
        self.neighbors(a).iter().find(|e| e.to == b).map(|e| e.cost)
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, adj)| adj.is_some())
            .map(|(i, _)| self.rng.point_at(i))
    }

    /// Every undirected edge once, as `(a, b, cost)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point, i32)> + '_ {
        self.nodes().flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .filter(move |e| a < e.to)
                .map(move |e| (a, e.to, e.cost))
        })
    }

    fn edges_of(&self, p: Point) -> Option<&[Edge]> {
        let i = self.rng.index_of(p)?;
        self.adjacency[i].as_deref()
    }

    fn insert_node(&mut self, p: Point) -> bool {
        let Some(i) = self.rng.index_of(p) else {
            return false;
        };
        if self.adjacency[i].is_some() {
            return false;
        }
        self.adjacency[i] = Some(Vec::with_capacity(4));
        self.nodes += 1;
        true
    }

    /// Set the cost of `a - b` in both adjacency lists. Both must be nodes.
    fn link(&mut self, a: Point, b: Point, cost: i32) {
        let (Some(ai), Some(bi)) = (self.rng.index_of(a), self.rng.index_of(b)) else {
            return;
        };
        let fresh = Self::upsert(&mut self.adjacency[ai], b, cost);
        Self::upsert(&mut self.adjacency[bi], a, cost);
        if fresh {
            self.edges += 1;
        }
    }

    fn upsert(adj: &mut Option<Vec<Edge>>, to: Point, cost: i32) -> bool {
        let Some(adj) = adj else {
            return false;
        };
        match adj.iter_mut().find(|e| e.to == to) {
            Some(e) => {
                e.cost = cost;
                false
            }
            None => {
                adj.push(Edge { to, cost });
                true
            }
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (a, b, cost) in self.edges() {
            writeln!(f, "{a} - {b}: {cost}")?;
        }
        Ok(())
    }
}

impl Pather for Graph {
    fn bounds(&self) -> Range {
        self.rng
    }

    fn contains(&self, p: Point) -> bool {
        Graph::contains(self, p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Graph::neighbors(self, p).iter().map(|e| e.to));
    }
}

impl WeightedPather for Graph {
    fn cost(&self, from: Point, to: Point) -> i32 {
        Graph::cost(self, from, to).unwrap_or(UNREACHABLE)
    }
}

impl AstarPather for Graph {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
