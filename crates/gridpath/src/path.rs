use std::fmt;

use gridpath_core::Point;

/// A minimum-cost path: the nodes from start to goal inclusive and the sum
/// of the edge costs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    nodes: Vec<Point>,
    cost: i32,
}

/// Deserialized fields, checked before they become a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    nodes: Vec<Point>,
    cost: i32,
}

/// Reasons a deserialized path is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPath {
    #[error("path has no nodes")]
    Empty,
    #[error("path cost {0} is negative")]
    NegativeCost(i32),
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = InvalidPath;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.nodes.is_empty() {
            return Err(InvalidPath::Empty);
        }
        if raw.cost < 0 {
            return Err(InvalidPath::NegativeCost(raw.cost));
        }
        Ok(Self::new(raw.nodes, raw.cost))
    }
}

impl Path {
    /// Wrap a reconstructed node sequence. `nodes` is never empty.
    pub(crate) fn new(nodes: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    /// First node.
    pub fn start(&self) -> Point {
        self.nodes[0]
    }

    /// Last node.
    pub fn goal(&self) -> Point {
        self.nodes[self.nodes.len() - 1]
    }

    /// Total cost.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of nodes (one more than the number of steps).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}
