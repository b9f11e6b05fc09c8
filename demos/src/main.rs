//! Runs A* over the built-in sample maps, or over a JSON scenario file,
//! printing the path and drawing the map.
//!
//! Run: cargo run --bin maze [scenario.json]
//! Set `RUST_LOG=debug` to see search statistics.

mod samples;
mod scenario;

use std::error::Error;
use std::path::Path;

use gridstar_core::{Axes, Point};
use gridstar_crossterm::{BinaryView, MapView, ScalarView, print_map};
use gridstar_paths::find_path;

use crate::scenario::{Map, Scenario};

fn builtin() -> Result<Vec<Scenario>, Box<dyn Error>> {
    Ok(vec![
        Scenario {
            name: "maze".to_string(),
            start: samples::MAZE_START,
            end: samples::MAZE_END,
            axes: Axes::RowY,
            map: Map::Binary(samples::parse_maze(samples::MAZE)?),
        },
        Scenario {
            name: "cost field".to_string(),
            start: samples::COST_FIELD_START,
            end: samples::COST_FIELD_END,
            axes: Axes::RowY,
            map: Map::Int(samples::parse_costs(samples::COST_FIELD)?),
        },
    ])
}

fn format_path(path: &[Point]) -> String {
    if path.is_empty() {
        return "no path".to_string();
    }
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn show(view: &impl MapView, path: &[Point]) -> Result<(), Box<dyn Error>> {
    println!("{}", format_path(path));
    print_map(view, Some(path))?;
    Ok(())
}

fn run(s: &Scenario) -> Result<(), Box<dyn Error>> {
    println!("== {} ({} -> {})", s.name, s.start, s.end);
    match &s.map {
        Map::Binary(g) => {
            let path = find_path(s.start, s.end, g, s.axes)?;
            show(&BinaryView::new(g, s.axes), &path)
        }
        Map::Int(g) => {
            let path = find_path(s.start, s.end, g, s.axes)?;
            show(&ScalarView::new(g, s.axes), &path)
        }
        Map::Float(g) => {
            let path = find_path(s.start, s.end, g, s.axes)?;
            show(&ScalarView::new(g, s.axes), &path)
        }
    }
}

fn main() {
    env_logger::init();

    let scenarios = match std::env::args_os().nth(1) {
        Some(arg) => Scenario::load(Path::new(&arg)).map(|s| vec![s]),
        None => builtin(),
    };

    let result = scenarios.and_then(|list| list.iter().try_for_each(run));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
