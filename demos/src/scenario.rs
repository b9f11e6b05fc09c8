//! Grid scenarios loaded from JSON files.
//!
//! ```json
//! {
//!   "start": { "x": 0, "y": 0 },
//!   "end": { "x": 3, "y": 2 },
//!   "axes": "RowY",
//!   "grid": { "kind": "float", "cells": [[0.0, 0.5, 1.0], [0.2, 0.1, 0.0]] }
//! }
//! ```
//!
//! `axes` is optional and defaults to `RowY` (rows are indexed by `y`).

use std::error::Error;
use std::path::Path;

use gridstar_core::{Axes, Grid, Point};
use serde::Deserialize;

/// Cell rows of a scenario, tagged by grid kind.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "cells", rename_all = "lowercase")]
pub enum Cells {
    Binary(Vec<Vec<bool>>),
    Int(Vec<Vec<i32>>),
    Float(Vec<Vec<f32>>),
}

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub axes: Axes,
    pub grid: Cells,
}

/// A grid of any supported kind, ready to search.
#[derive(Debug)]
pub enum Map {
    Binary(Grid<bool>),
    Int(Grid<i32>),
    Float(Grid<f32>),
}

#[derive(Debug)]
pub struct Scenario {
    pub name: String,
    pub start: Point,
    pub end: Point,
    pub axes: Axes,
    pub map: Map,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(name: &str, text: &str) -> Result<Self, Box<dyn Error>> {
        let file: ScenarioFile = serde_json::from_str(text)?;
        let map = match file.grid {
            Cells::Binary(rows) => Map::Binary(Grid::from_rows(rows)?),
            Cells::Int(rows) => Map::Int(Grid::from_rows(rows)?),
            Cells::Float(rows) => Map::Float(Grid::from_rows(rows)?),
        };
        Ok(Self {
            name: name.to_string(),
            start: file.start,
            end: file.end,
            axes: file.axes,
            map,
        })
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&path.display().to_string(), &text)
    }
}
