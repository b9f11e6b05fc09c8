//! Cost models for the three grid kinds.
//!
//! | Grid | Model | Walls | Step cost | Heuristic |
//! |---|---|---|---|---|
//! | `Grid<bool>` | [`BinaryModel`] | `false` cells | 1000 / 1414 | `1000 * chebyshev` |
//! | `Grid<i32>`, `Grid<f32>`, `Grid<f64>` | [`ScalarModel`] | cells at the global max | `1` / `√2` + normalized cost | `chebyshev` |
//!
//! Scalar step costs are rounded to multiples of `1 / COST_SCALE`. Sums of
//! such values are exact in `f64`, so two routes with the same steps in a
//! different order cost exactly the same and ties fall through to the
//! open-set tie-break.

use std::f64::consts::SQRT_2;

use gridstar_core::{Axes, Grid, Point, Scalar, Size, ValueRange};

use crate::distance::chebyshev;
use crate::neighbors::is_diagonal;
use crate::traits::CostModel;

/// Cost of an orthogonal step on a binary grid.
pub const ORTHOGONAL_STEP: i64 = 1000;
/// Cost of a diagonal step on a binary grid (√2 scaled by 1000).
pub const DIAGONAL_STEP: i64 = 1414;
/// Resolution of scalar step costs (2^24). Path costs stay exact below 2^29.
pub const COST_SCALE: f64 = 16_777_216.0;

#[inline]
fn quantize(c: f64) -> f64 {
    (c * COST_SCALE).round() / COST_SCALE
}

// ---------------------------------------------------------------------------
// BinaryModel
// ---------------------------------------------------------------------------

/// Walkable/blocked grid: `true` cells can be entered.
///
/// Costs are integers scaled by 1000 so long paths accumulate no rounding
/// error.
#[derive(Clone, Copy, Debug)]
pub struct BinaryModel<'a> {
    grid: &'a Grid<bool>,
    axes: Axes,
}

impl<'a> BinaryModel<'a> {
    pub fn new(grid: &'a Grid<bool>, axes: Axes) -> Self {
        Self { grid, axes }
    }
}

impl CostModel for BinaryModel<'_> {
    type Cost = i64;

    fn size(&self) -> Size {
        self.grid.size(self.axes)
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.get(p, self.axes).copied().unwrap_or(false)
    }

    fn step_cost(&self, from: Point, to: Point) -> i64 {
        if is_diagonal(to - from) {
            DIAGONAL_STEP
        } else {
            ORTHOGONAL_STEP
        }
    }

    fn estimate(&self, from: Point, to: Point) -> i64 {
        ORTHOGONAL_STEP * i64::from(chebyshev(from, to))
    }
}

// ---------------------------------------------------------------------------
// ScalarModel
// ---------------------------------------------------------------------------

/// Weighted grid. Entering a cell costs the base step (1 or √2) plus the
/// cell's value normalized against the grid's global range.
///
/// The range is scanned once on construction; see [`ValueRange`] for the
/// wall rule.
#[derive(Clone, Copy, Debug)]
pub struct ScalarModel<'a, T> {
    grid: &'a Grid<T>,
    axes: Axes,
    range: ValueRange,
}

impl<'a, T: Scalar> ScalarModel<'a, T> {
    pub fn new(grid: &'a Grid<T>, axes: Axes) -> Self {
        Self {
            grid,
            axes,
            range: ValueRange::scan(grid),
        }
    }

    fn value(&self, p: Point) -> Option<f64> {
        self.grid.get(p, self.axes).map(|v| v.to_f64())
    }
}

impl<T: Scalar> CostModel for ScalarModel<'_, T> {
    type Cost = f64;

    fn size(&self) -> Size {
        self.grid.size(self.axes)
    }

    fn passable(&self, p: Point) -> bool {
        self.value(p).is_some_and(|v| !self.range.is_wall(v))
    }

    fn step_cost(&self, from: Point, to: Point) -> f64 {
        let base = if is_diagonal(to - from) { SQRT_2 } else { 1.0 };
        quantize(base + self.value(to).map_or(0.0, |v| self.range.normalize(v)))
    }

    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(chebyshev(from, to))
    }
}

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// A borrowed grid of any supported kind, used to pick a cost model at call
/// time.
#[derive(Clone, Copy, Debug)]
pub enum Terrain<'a> {
    Binary(&'a Grid<bool>),
    Int(&'a Grid<i32>),
    Float(&'a Grid<f32>),
    Double(&'a Grid<f64>),
}

impl<'a> From<&'a Grid<bool>> for Terrain<'a> {
    fn from(g: &'a Grid<bool>) -> Self {
        Terrain::Binary(g)
    }
}

impl<'a> From<&'a Grid<i32>> for Terrain<'a> {
    fn from(g: &'a Grid<i32>) -> Self {
        Terrain::Int(g)
    }
}

impl<'a> From<&'a Grid<f32>> for Terrain<'a> {
    fn from(g: &'a Grid<f32>) -> Self {
        Terrain::Float(g)
    }
}

impl<'a> From<&'a Grid<f64>> for Terrain<'a> {
    fn from(g: &'a Grid<f64>) -> Self {
        Terrain::Double(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_costs() {
        let g = Grid::from_rows(vec![vec![true, false], vec![true, true]]).unwrap();
        let m = BinaryModel::new(&g, Axes::RowY);
        assert_eq!(m.size(), Size::new(2, 2));
        assert!(m.passable(Point::new(0, 0)));
        assert!(!m.passable(Point::new(1, 0)));
        assert!(!m.passable(Point::new(2, 0)));
        assert_eq!(m.step_cost(Point::new(0, 0), Point::new(0, 1)), 1000);
        assert_eq!(m.step_cost(Point::new(0, 0), Point::new(1, 1)), 1414);
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(1, 1)), 1000);
    }

    #[test]
    fn binary_respects_axes() {
        // 1 row, 2 cols: (1, 0) under RowY, (0, 1) under RowX.
        let g = Grid::from_rows(vec![vec![true, false]]).unwrap();
        assert!(!BinaryModel::new(&g, Axes::RowY).passable(Point::new(1, 0)));
        assert!(!BinaryModel::new(&g, Axes::RowX).passable(Point::new(0, 1)));
        assert!(!BinaryModel::new(&g, Axes::RowX).passable(Point::new(1, 0)));
    }

    #[test]
    fn scalar_costs_use_destination_value() {
        let g = Grid::from_rows(vec![vec![0, 5], vec![10, 0]]).unwrap();
        let m = ScalarModel::new(&g, Axes::RowY);
        assert!(m.passable(Point::new(1, 0)));
        assert!(!m.passable(Point::new(0, 1)));
        let orth = m.step_cost(Point::new(0, 0), Point::new(1, 0));
        assert!((orth - 1.5).abs() < 1e-12);
        let diag = m.step_cost(Point::new(1, 0), Point::new(0, 1));
        assert!((diag - (SQRT_2 + 1.0)).abs() < 1e-7);
        assert_eq!(diag * COST_SCALE, (diag * COST_SCALE).round());
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(1, 1)), 1.0);
    }

    #[test]
    fn scalar_step_sums_do_not_depend_on_order() {
        let g = Grid::from_rows(vec![vec![0.0, 0.1, 0.7, 0.3, 1.0], vec![0.0; 5]]).unwrap();
        let m = ScalarModel::new(&g, Axes::RowY);
        let a = m.step_cost(Point::new(0, 1), Point::new(1, 0));
        let b = m.step_cost(Point::new(1, 1), Point::new(2, 0));
        let c = m.step_cost(Point::new(3, 1), Point::new(3, 0));
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a + b) + c, (c + a) + b);
        assert_eq!((a + c) + b, (b + c) + a);
    }

    #[test]
    fn scalar_float_grid() {
        let g = Grid::from_rows(vec![vec![0.25f32, 1.0, 0.75]]).unwrap();
        let m = ScalarModel::new(&g, Axes::RowY);
        assert!(!m.passable(Point::new(1, 0)));
        assert!(m.passable(Point::new(2, 0)));
    }

    #[test]
    fn terrain_from_grids() {
        let b = Grid::new(1, 1, true);
        let i = Grid::new(1, 1, 0i32);
        let f = Grid::new(1, 1, 0.0f32);
        let d = Grid::new(1, 1, 0.0f64);
        assert!(matches!(Terrain::from(&b), Terrain::Binary(_)));
        assert!(matches!(Terrain::from(&i), Terrain::Int(_)));
        assert!(matches!(Terrain::from(&f), Terrain::Float(_)));
        assert!(matches!(Terrain::from(&d), Terrain::Double(_)));
    }
}
