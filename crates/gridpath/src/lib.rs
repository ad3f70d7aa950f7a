//! Shortest paths on a 2-D grid of blocked and free cells.
//!
//! The free cells of a square grid become the nodes of an undirected
//! [`Graph`] with unit-cost edges between orthogonal neighbours. Two
//! interchangeable strategies find a minimum-cost path between two nodes:
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** with the Manhattan-distance heuristic ([`astar`])
//!
//! Both stop as soon as the goal is popped from the priority queue and share
//! the predecessor-chain walk in [`reconstruct`]. Every call builds its own
//! tables, so a graph can be searched any number of times.
//!
//! ```
//! use gridpath::{Algorithm, build_graph, solve};
//! use gridpath_core::Point;
//!
//! let graph = build_graph([Point::new(1, 1)], 3);
//! let path = solve(&graph, Point::new(0, 0), Point::new(2, 2), Algorithm::AStar).unwrap();
//! assert_eq!(path.cost(), 4);
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | endpoint checks, neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! Progress is reported through a [`SearchObserver`], which can also cancel
//! a running search between queue pops.

mod astar;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod neighbors;
mod observer;
mod path;
mod reconstruct;
mod search;
mod solve;
mod traits;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use error::{GraphError, SolveError};
pub use graph::{Edge, Graph, UNIT_COST, UNREACHABLE};
pub use neighbors::Neighbors;
pub use observer::{SearchObserver, Silent};
pub use path::{InvalidPath, Path};
pub use reconstruct::{Parent, Predecessors, reconstruct};
pub use solve::{Algorithm, ParseAlgorithmError, build_graph, solve, solve_with};
pub use traits::{AstarPather, Pather, WeightedPather};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridpath_core::Point;

    #[test]
    fn algorithm_names() {
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), r#""astar""#);
        let back: Algorithm = serde_json::from_str(r#""a*""#).unwrap();
        assert_eq!(back, Algorithm::AStar);
    }

    #[test]
    fn path_round_trip() {
        let graph = build_graph([], 2);
        let path = solve(&graph, Point::new(0, 0), Point::new(1, 1), Algorithm::Dijkstra).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn path_without_nodes_is_rejected() {
        let err = serde_json::from_str::<Path>(r#"{"nodes":[],"cost":0}"#).unwrap_err();
        assert!(err.to_string().contains("no nodes"));
    }

    #[test]
    fn path_with_negative_cost_is_rejected() {
        let json = r#"{"nodes":[{"x":0,"y":0},{"x":1,"y":0}],"cost":-3}"#;
        let err = serde_json::from_str::<Path>(json).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }
}
