//! Crossterm map renderer for gridstar.
//!
//! Turns a grid and an optional path into display rows of [`Marker`]s and
//! writes them to a terminal. Each cell takes two characters:
//!
//! | Marker | Glyph | Color |
//! |---|---|---|
//! | wall | `▓▓` | white |
//! | path | `▒▒` | magenta |
//! | open | `░░` | white, or a heat band for weighted grids |
//!
//! Rendering never touches the pathfinder; it only needs the grid, its
//! orientation and the path cells.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
};

use gridstar_core::{Axes, Grid, Point, Scalar, Size, ValueRange};

/// Number of heat bands used for weighted grids.
pub const HEAT_BANDS: u8 = 9;

const HEAT_COLORS: [CtColor; HEAT_BANDS as usize] = [
    CtColor::DarkGreen,
    CtColor::Green,
    CtColor::DarkCyan,
    CtColor::Cyan,
    CtColor::Blue,
    CtColor::DarkYellow,
    CtColor::Yellow,
    CtColor::DarkRed,
    CtColor::Red,
];

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// Shade of an open (non-wall, non-path) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// No cost information: binary grids and zero-valued cells.
    Plain,
    /// Heat band `0..HEAT_BANDS` of a weighted cell, cheapest first.
    Heat(u8),
}

impl Shade {
    /// Bucket a normalized cost into a heat band of width 0.1; everything
    /// from 0.8 up shares the last band.
    pub fn heat(normalized: f64) -> Self {
        let band = (normalized * 10.0).floor().clamp(0.0, f64::from(HEAT_BANDS - 1));
        Shade::Heat(band as u8)
    }

    fn color(self) -> CtColor {
        match self {
            Shade::Plain => CtColor::White,
            Shade::Heat(b) => HEAT_COLORS[usize::from(b.min(HEAT_BANDS - 1))],
        }
    }
}

/// What a single cell is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Wall,
    Path,
    Open(Shade),
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Marker::Wall => "▓▓",
            Marker::Path => "▒▒",
            Marker::Open(_) => "░░",
        }
    }

    pub fn color(self) -> CtColor {
        match self {
            Marker::Wall => CtColor::White,
            Marker::Path => CtColor::Magenta,
            Marker::Open(s) => s.color(),
        }
    }
}

// ---------------------------------------------------------------------------
// Map views
// ---------------------------------------------------------------------------

/// A grid seen through its orientation, as the renderer needs it.
pub trait MapView {
    /// Logical extent; rows are drawn for each `y`, cells for each `x`.
    fn size(&self) -> Size;

    /// Marker of `p` ignoring any path: [`Marker::Wall`] or [`Marker::Open`].
    fn base_marker(&self, p: Point) -> Marker;
}

/// Binary grid view: `false` cells are walls.
pub struct BinaryView<'a> {
    grid: &'a Grid<bool>,
    axes: Axes,
}

impl<'a> BinaryView<'a> {
    pub fn new(grid: &'a Grid<bool>, axes: Axes) -> Self {
        Self { grid, axes }
    }
}

impl MapView for BinaryView<'_> {
    fn size(&self) -> Size {
        self.grid.size(self.axes)
    }

    fn base_marker(&self, p: Point) -> Marker {
        match self.grid.get(p, self.axes) {
            Some(true) => Marker::Open(Shade::Plain),
            _ => Marker::Wall,
        }
    }
}

/// Weighted grid view: maximum cells are walls, the rest are heat-shaded.
pub struct ScalarView<'a, T> {
    grid: &'a Grid<T>,
    axes: Axes,
    range: ValueRange,
}

impl<'a, T: Scalar> ScalarView<'a, T> {
    pub fn new(grid: &'a Grid<T>, axes: Axes) -> Self {
        Self {
            grid,
            axes,
            range: ValueRange::scan(grid),
        }
    }
}

impl<T: Scalar> MapView for ScalarView<'_, T> {
    fn size(&self) -> Size {
        self.grid.size(self.axes)
    }

    fn base_marker(&self, p: Point) -> Marker {
        let Some(v) = self.grid.get(p, self.axes).map(|v| v.to_f64()) else {
            return Marker::Wall;
        };
        if self.range.is_wall(v) {
            Marker::Wall
        } else if v == 0.0 {
            Marker::Open(Shade::Plain)
        } else {
            Marker::Open(Shade::heat(self.range.normalize(v)))
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Collect a path into a set for constant-time membership tests.
pub fn path_set(path: &[Point]) -> HashSet<Point> {
    path.iter().copied().collect()
}

/// One row of markers per `y`, one marker per `x`. Walls win over path
/// membership.
pub fn rows(view: &impl MapView, path: Option<&HashSet<Point>>) -> Vec<Vec<Marker>> {
    let size = view.size();
    (0..size.height)
        .map(|y| {
            (0..size.width)
                .map(|x| {
                    let p = Point::new(x, y);
                    let base = view.base_marker(p);
                    if base != Marker::Wall && path.is_some_and(|s| s.contains(&p)) {
                        Marker::Path
                    } else {
                        base
                    }
                })
                .collect()
        })
        .collect()
}

/// Glyphs only, one line per row.
pub fn render_to_string(rows: &[Vec<Marker>]) -> String {
    let mut out = String::new();
    for row in rows {
        for m in row {
            out.push_str(m.glyph());
        }
        out.push('\n');
    }
    out
}

/// Write colored rows to `w`, resetting the color after every cell.
pub fn write_map<W: Write>(w: &mut W, rows: &[Vec<Marker>]) -> io::Result<()> {
    for row in rows {
        for m in row {
            queue!(w, SetForegroundColor(m.color()), Print(m.glyph()), ResetColor)?;
        }
        queue!(w, Print("\n"))?;
    }
    w.flush()
}

/// Render `view` with `path` highlighted straight to stdout.
pub fn print_map(view: &impl MapView, path: Option<&[Point]>) -> io::Result<()> {
    let set = path.map(path_set);
    let rows = rows(view, set.as_ref());
    let mut stdout = io::stdout().lock();
    write_map(&mut stdout, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(rows: &[&str]) -> Grid<bool> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| c != '#').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn heat_bands() {
        assert_eq!(Shade::heat(0.0), Shade::Heat(0));
        assert_eq!(Shade::heat(0.05), Shade::Heat(0));
        assert_eq!(Shade::heat(0.1), Shade::Heat(1));
        assert_eq!(Shade::heat(0.55), Shade::Heat(5));
        assert_eq!(Shade::heat(0.8), Shade::Heat(8));
        assert_eq!(Shade::heat(0.99), Shade::Heat(8));
        assert_eq!(Shade::heat(1.0), Shade::Heat(8));
    }

    #[test]
    fn binary_rows_with_path() {
        let g = maze(&["..#", "..."]);
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)];
        let set = path_set(&path);
        let out = render_to_string(&rows(&BinaryView::new(&g, Axes::RowY), Some(&set)));
        assert_eq!(out, "▒▒░░▓▓\n░░▒▒▒▒\n");
    }

    #[test]
    fn rows_follow_orientation() {
        // One buffer row of three cells is a 1x3 column under RowX.
        let g = maze(&[".#."]);
        let out = render_to_string(&rows(&BinaryView::new(&g, Axes::RowX), None));
        assert_eq!(out, "░░\n▓▓\n░░\n");
    }

    #[test]
    fn walls_win_over_path() {
        let g = maze(&["#"]);
        let set = path_set(&[Point::new(0, 0)]);
        let r = rows(&BinaryView::new(&g, Axes::RowY), Some(&set));
        assert_eq!(r, vec![vec![Marker::Wall]]);
    }

    #[test]
    fn scalar_markers() {
        let g = Grid::from_rows(vec![vec![0, 5, 10, 1]]).unwrap();
        let r = rows(&ScalarView::new(&g, Axes::RowY), None);
        assert_eq!(
            r[0],
            vec![
                Marker::Open(Shade::Plain),
                Marker::Open(Shade::Heat(5)),
                Marker::Wall,
                Marker::Open(Shade::Heat(1)),
            ]
        );
        assert_eq!(r[0][1].color(), CtColor::DarkYellow);
    }

    #[test]
    fn write_map_emits_every_glyph() {
        let g = maze(&[".#"]);
        let r = rows(&BinaryView::new(&g, Axes::RowY), None);
        let mut buf = Vec::new();
        write_map(&mut buf, &r).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("░░"));
        assert!(text.contains("▓▓"));
        assert!(text.ends_with('\n'));
    }
}
