use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected grid with edge costs of at least 1 this never
/// overestimates the remaining cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
