//! `gridpath` — solve a text map and print the result.
//!
//! Plays the editor/renderer role around the library: it collects the
//! blocked cells and endpoints from a map file, rebuilds the graph, runs the
//! chosen strategies and draws the path.

mod config;
mod logging;
mod map;
mod render;

use std::fs;

use clap::Parser;
use gridpath::{Algorithm, Path, SolveError, build_graph, solve_with};
use gridpath_core::Point;

use config::{Cli, DemoConfig};
use map::GridMap;

/// Outcome of one strategy on one map.
struct Run {
    algorithm: Algorithm,
    result: Result<Path, SolveError>,
    visited: Vec<Point>,
}

fn run(map: &GridMap, algorithm: Algorithm) -> Run {
    // Rebuilt per request: the editor may have changed the map since the last solve.
    let graph = build_graph(map.blocked().iter().copied(), map.size());
    let mut visited = Vec::new();
    let result = solve_with(&graph, map.start(), map.goal(), algorithm, &mut |p: Point| {
        visited.push(p)
    });
    Run {
        algorithm,
        result,
        visited,
    }
}

fn report(map: &GridMap, runs: &[Run], show_visited: bool) -> Result<(), SolveError> {
    for r in runs {
        let visited: &[Point] = if show_visited { &r.visited } else { &[] };
        match &r.result {
            Ok(path) => {
                println!(
                    "{}: cost {}, {} steps, {} nodes finalized",
                    r.algorithm,
                    path.cost(),
                    path.len() - 1,
                    r.visited.len()
                );
                print!("{}", render::render(map, Some(path), visited));
            }
            Err(e) if e.is_not_found() => {
                println!("{}: no path ({} nodes finalized)", r.algorithm, r.visited.len());
                print!("{}", render::render(map, None, visited));
            }
            Err(e) => return Err(e.clone()),
        }
        println!();
    }

    let costs: Vec<i32> = runs
        .iter()
        .filter_map(|r| r.result.as_ref().ok().map(Path::cost))
        .collect();
    if costs.windows(2).any(|w| w[0] != w[1]) {
        log::error!("strategies disagree on the optimal cost: {costs:?}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = DemoConfig::resolve(&cli)?;
    let _logger = logging::init(&config.log_level)?;
    log::info!("settings: {config:?}");

    let text = fs::read_to_string(&cli.map)?;
    let map = GridMap::parse(&text)?;
    log::info!(
        "{}: {}x{} map, {} blocked, {} -> {}",
        cli.map.display(),
        map.size(),
        map.size(),
        map.blocked().len(),
        map.start(),
        map.goal()
    );

    let runs: Vec<Run> = config.algorithms().into_iter().map(|alg| run(&map, alg)).collect();
    report(&map, &runs, config.show_visited)?;
    Ok(())
}
