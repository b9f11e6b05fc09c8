//! Numeric cell values and the wall rule for weighted grids.
//!
//! Weighted grids carry no separate wall sentinel: after a single scan of
//! every cell, any cell holding the grid's maximum value is a wall and all
//! other cells are passable with a cost normalized into `[0, 1)`.

use crate::grid::Grid;

/// A numeric cell value usable in a weighted grid.
pub trait Scalar: Copy {
    fn to_f64(self) -> f64;
}

impl Scalar for i32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Global minimum and maximum of a weighted grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Scan every cell once. NaN cells are ignored.
    pub fn scan<T: Scalar>(grid: &Grid<T>) -> Self {
        grid.cells().iter().fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |r, v| {
                let v = v.to_f64();
                Self {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }
            },
        )
    }

    /// Whether every cell holds the same value.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.max <= self.min
    }

    /// Whether a cell holding `v` is a wall.
    ///
    /// Cells equal to the maximum are walls, unless the grid is uniform, in
    /// which case there is no maximum to single out and nothing is a wall.
    /// NaN is always a wall.
    #[inline]
    pub fn is_wall(&self, v: f64) -> bool {
        v.is_nan() || (!self.is_uniform() && v >= self.max)
    }

    /// `(v - min) / (max - min)`, or 0 for a uniform grid.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        let n = (v - self.min) / span;
        if n.is_finite() { n } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_int_grid() {
        let g = Grid::from_rows(vec![vec![3, 1], vec![9, 5]]).unwrap();
        let r = ValueRange::scan(&g);
        assert_eq!(r, ValueRange { min: 1.0, max: 9.0 });
        assert!(r.is_wall(9.0));
        assert!(!r.is_wall(5.0));
        assert_eq!(r.normalize(5.0), 0.5);
        assert_eq!(r.normalize(1.0), 0.0);
    }

    #[test]
    fn every_maximum_cell_is_a_wall() {
        let g = Grid::from_rows(vec![vec![0.5f32, 2.0, 2.0]]).unwrap();
        let r = ValueRange::scan(&g);
        assert_eq!(g.cells().iter().filter(|v| r.is_wall(v.to_f64())).count(), 2);
    }

    #[test]
    fn uniform_grid_has_no_walls() {
        let g = Grid::new(3, 3, 7i32);
        let r = ValueRange::scan(&g);
        assert!(r.is_uniform());
        assert!(!r.is_wall(7.0));
        assert_eq!(r.normalize(7.0), 0.0);
    }

    #[test]
    fn nan_is_ignored_by_scan_and_is_a_wall() {
        let g = Grid::from_rows(vec![vec![1.0f64, f64::NAN, 3.0]]).unwrap();
        let r = ValueRange::scan(&g);
        assert_eq!(r, ValueRange { min: 1.0, max: 3.0 });
        assert!(r.is_wall(f64::NAN));
    }
}
