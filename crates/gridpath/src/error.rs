use gridpath_core::Point;

/// Errors reported by a solve call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The start or goal is not a node of the graph (for instance it lies on
    /// a blocked cell). Reported before any search work.
    #[error("undefined endpoint: {0} is not a node of the graph")]
    UndefinedEndpoint(Point),
    /// The search exhausted every reachable node without popping the goal.
    #[error("no path from {start} to {goal}")]
    Unreachable { start: Point, goal: Point },
    /// The goal was reached but its predecessor chain does not lead back to
    /// the start.
    #[error("internal inconsistency: predecessor chain of {goal} does not reach {start}")]
    InternalInconsistency { start: Point, goal: Point },
    /// The observer asked the search to stop.
    #[error("search cancelled")]
    Cancelled,
}

impl SolveError {
    /// Whether this is the expected "no path" outcome rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

/// Errors from editing a [`Graph`](crate::Graph) by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("{0} is not a node of the graph")]
    MissingNode(Point),
    #[error("self-loop on {0}")]
    SelfLoop(Point),
    #[error("{from} and {to} are not orthogonal neighbours")]
    NotAdjacent { from: Point, to: Point },
    #[error("edge {from} - {to} has non-positive cost {cost}")]
    InvalidCost { from: Point, to: Point, cost: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unreachable_is_not_found() {
        let (start, goal) = (Point::new(0, 1), Point::new(2, 1));
        assert!(SolveError::Unreachable { start, goal }.is_not_found());
        assert!(!SolveError::UndefinedEndpoint(start).is_not_found());
        assert!(!SolveError::InternalInconsistency { start, goal }.is_not_found());
        assert!(!SolveError::Cancelled.is_not_found());
    }

    #[test]
    fn messages_name_the_cells() {
        let err = SolveError::UndefinedEndpoint(Point::new(1, 1));
        assert_eq!(err.to_string(), "undefined endpoint: (1, 1) is not a node of the graph");
        let err = GraphError::InvalidCost {
            from: Point::new(0, 0),
            to: Point::new(1, 0),
            cost: 0,
        };
        assert_eq!(err.to_string(), "edge (0, 0) - (1, 0) has non-positive cost 0");
    }
}
