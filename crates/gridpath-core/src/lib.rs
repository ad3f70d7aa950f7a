//! **gridpath-core** — geometry primitives for the gridpath crates.
//!
//! Grid cells are addressed by [`Point`]; boards are half-open [`Range`]s.

pub mod geom;

pub use geom::{Point, Range, RangeIter};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
