use std::collections::HashSet;

use gridpath::Path;
use gridpath_core::{Point, Range};

use crate::map::GridMap;

/// Draw `map` with the path as `*` and, if given, visited cells as `o`.
pub fn render(map: &GridMap, path: Option<&Path>, visited: &[Point]) -> String {
    let on_path: HashSet<Point> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    let seen: HashSet<Point> = visited.iter().copied().collect();

    let size = map.size();
    let mut out = String::with_capacity(((size + 1) * size).max(0) as usize);
    for p in Range::square(size) {
        let ch = if p == map.start() {
            'S'
        } else if p == map.goal() {
            'E'
        } else if map.is_blocked(p) {
            '#'
        } else if on_path.contains(&p) {
            '*'
        } else if seen.contains(&p) {
            'o'
        } else {
            '.'
        };
        out.push(ch);
        if p.x == size - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::{Algorithm, build_graph, solve};

    #[test]
    fn marks_path_and_visited() {
        let map = GridMap::parse("S.#\n..#\n#.E").unwrap();
        let graph = build_graph(map.blocked().iter().copied(), map.size());
        let path = solve(&graph, map.start(), map.goal(), Algorithm::Dijkstra).unwrap();
        assert_eq!(path.cost(), 4);
        let out = render(&map, Some(&path), &[Point::new(0, 1)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 3));
        assert_eq!(out.matches('*').count(), 3);
        assert!(out.starts_with('S'));
        assert!(out.trim_end().ends_with('E'));
    }

    #[test]
    fn no_path_leaves_map_unchanged() {
        let text = "S#.\n.#.\n.#E\n";
        let map = GridMap::parse(text).unwrap();
        assert_eq!(render(&map, None, &[]), text);
    }
}
