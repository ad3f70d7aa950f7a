use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;

use crate::astar::astar;
use crate::dijkstra::dijkstra;
use crate::error::SolveError;
use crate::graph::Graph;
use crate::observer::{SearchObserver, Silent};
use crate::path::Path;

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Uniform-cost search.
    #[default]
    Dijkstra,
    /// A* with the Manhattan-distance heuristic.
    #[cfg_attr(feature = "serde", serde(alias = "a*"))]
    AStar,
}

impl Algorithm {
    /// Both strategies, in a fixed order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an [`Algorithm`] fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"dijkstra\" or \"astar\")")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Build the graph of a `size` × `size` grid with the given blocked cells.
///
/// See [`Graph::build`].
pub fn build_graph<I>(blocked: I, size: i32) -> Graph
where
    I: IntoIterator<Item = Point>,
{
    Graph::build(blocked, size)
}

/// Find a minimum-cost path from `start` to `goal` with `algorithm`.
pub fn solve(graph: &Graph, start: Point, goal: Point, algorithm: Algorithm) -> Result<Path, SolveError> {
    solve_with(graph, start, goal, algorithm, &mut Silent)
}

/// Like [`solve`], reporting progress to `observer`.
pub fn solve_with<O>(
    graph: &Graph,
    start: Point,
    goal: Point,
    algorithm: Algorithm,
    observer: &mut O,
) -> Result<Path, SolveError>
where
    O: SearchObserver + ?Sized,
{
    match algorithm {
        Algorithm::Dijkstra => dijkstra(graph, start, goal, observer),
        Algorithm::AStar => astar(graph, start, goal, observer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" AStar ".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("bfs".parse::<Algorithm>().is_err());
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>(), Ok(alg));
        }
    }

    #[test]
    fn dispatches_to_both() {
        let graph = build_graph([Point::new(1, 1)], 3);
        for alg in Algorithm::ALL {
            let path = solve(&graph, Point::new(0, 0), Point::new(2, 2), alg).unwrap();
            assert_eq!(path.cost(), 4, "{alg}");
        }
    }

    #[test]
    fn observer_is_forwarded() {
        let graph = build_graph([], 3);
        for alg in Algorithm::ALL {
            let mut seen = 0;
            solve_with(&graph, Point::new(0, 0), Point::new(2, 0), alg, &mut |_: Point| seen += 1)
                .unwrap();
            assert!(seen >= 1, "{alg}");
        }
    }
}
