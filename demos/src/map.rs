//! Text maps: the grid an editor would hand to the solver.
//!
//! A map is a square block of lines of equal width:
//!
//! ```text
//! S..#
//! .#..
//! ...#
//! #..E
//! ```
//!
//! `#` is a blocked cell, `.` a free one, `S` the start and `E` the end.
//! Exactly one `S` and one `E` are required.

use std::collections::HashSet;

use gridpath_core::Point;

/// A parsed map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    size: i32,
    blocked: HashSet<Point>,
    start: Point,
    goal: Point,
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("line {line} has width {got}, expected {expected}")]
    InconsistentSize { line: i32, expected: i32, got: i32 },
    #[error("map is {width}x{height}, expected a square")]
    NotSquare { width: i32, height: i32 },
    #[error("map contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("map has no \u{201c}{0}\u{201d} cell")]
    MissingEndpoint(char),
    #[error("map has a second \u{201c}{ch}\u{201d} at {pos}")]
    DuplicateEndpoint { ch: char, pos: Point },
}

impl GridMap {
    /// Parse a map. Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim_matches(['\n', '\r']);
        if s.trim().is_empty() {
            return Err(MapError::Empty);
        }

        let mut width = -1;
        let mut height = 0;
        let mut blocked = HashSet::new();
        let mut start = None;
        let mut goal = None;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let line = line.trim_end_matches('\r');
            let w = line.chars().count() as i32;
            if width < 0 {
                width = w;
            } else if w != width {
                return Err(MapError::InconsistentSize {
                    line: y,
                    expected: width,
                    got: w,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                match ch {
                    '.' => {}
                    '#' => {
                        blocked.insert(pos);
                    }
                    'S' => set_once(&mut start, ch, pos)?,
                    'E' => set_once(&mut goal, ch, pos)?,
                    _ => return Err(MapError::InvalidChar { ch, pos }),
                }
            }
            height += 1;
        }

        if width != height {
            return Err(MapError::NotSquare { width, height });
        }
        Ok(Self {
            size: width,
            blocked,
            start: start.ok_or(MapError::MissingEndpoint('S'))?,
            goal: goal.ok_or(MapError::MissingEndpoint('E'))?,
        })
    }

    /// Side length.
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn blocked(&self) -> &HashSet<Point> {
        &self.blocked
    }

    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }
}

fn set_once(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), MapError> {
    if slot.is_some() {
        return Err(MapError::DuplicateEndpoint { ch, pos });
    }
    *slot = Some(pos);
    Ok(())
}
