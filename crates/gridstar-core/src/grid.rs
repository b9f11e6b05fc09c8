//! Dense rectangular cost buffers and their axis orientation.
//!
//! A [`Grid`] stores `rows x cols` values in row-major order. How a
//! [`Point`] maps onto a `(row, col)` pair is decided by [`Axes`], which is
//! the only place the orientation is resolved: bounds checks, reads and
//! writes all go through it.

use std::fmt;

use crate::geom::{Point, Size};

// ---------------------------------------------------------------------------
// Axes
// ---------------------------------------------------------------------------

/// Orientation of a grid buffer relative to point coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axes {
    /// `row = y`, `col = x`. The usual layout of a map typed in as text.
    #[default]
    RowY,
    /// `row = x`, `col = y`.
    RowX,
}

impl Axes {
    /// Buffer `(row, col)` addressed by `p`.
    #[inline]
    pub fn index(self, p: Point) -> (i32, i32) {
        match self {
            Axes::RowY => (p.y, p.x),
            Axes::RowX => (p.x, p.y),
        }
    }

    /// Logical point extent of a `rows x cols` buffer. Dimensions beyond
    /// `i32::MAX` saturate.
    #[inline]
    pub fn extent(self, rows: usize, cols: usize) -> Size {
        let clamp = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);
        let (rows, cols) = (clamp(rows), clamp(cols));
        match self {
            Axes::RowY => Size::new(cols, rows),
            Axes::RowX => Size::new(rows, cols),
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A dense `rows x cols` buffer of cell values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "GridRepr<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Copy of the grid with rows and columns exchanged.
    ///
    /// Reading the copy with the other [`Axes`] yields the same value at
    /// every point.
    pub fn transposed(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                cells.push(self.cells[r * self.cols + c].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer. Fails if its length is not `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != rows * cols {
            return Err(GridError::SizeMismatch {
                expected: rows * cols,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Logical extent under the given orientation.
    #[inline]
    pub fn size(&self, axes: Axes) -> Size {
        axes.extent(self.rows, self.cols)
    }

    /// Whether `p` is a valid coordinate under the given orientation.
    #[inline]
    pub fn contains(&self, p: Point, axes: Axes) -> bool {
        self.size(axes).contains(p)
    }

    /// Raw row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    fn offset(&self, p: Point, axes: Axes) -> Option<usize> {
        let (r, c) = axes.index(p);
        if r < 0 || c < 0 || r as usize >= self.rows || c as usize >= self.cols {
            return None;
        }
        Some(r as usize * self.cols + c as usize)
    }

    /// Value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point, axes: Axes) -> Option<&T> {
        self.offset(p, axes).map(|i| &self.cells[i])
    }

    /// Set the value at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, axes: Axes, value: T) {
        if let Some(i) = self.offset(p, axes) {
            self.cells[i] = value;
        }
    }
}

/// Unchecked wire form of a [`Grid`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(r: GridRepr<T>) -> Result<Self, GridError> {
        Grid::from_vec(r.rows, r.cols, r.cells)
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The flat buffer does not hold `rows * cols` values.
    SizeMismatch { expected: usize, actual: usize },
    /// A row differs in length from the first row.
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid: expected {expected} cells, got {actual}")
            }
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(
                f,
                "grid: row {row} has {actual} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<i32> {
        // 2 rows, 3 cols
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn extent_saturates_oversized_dimensions() {
        assert_eq!(Axes::default(), Axes::RowY);
        assert_eq!(Axes::RowY.extent(2, 3), Size::new(3, 2));
        assert_eq!(Axes::RowX.extent(2, 3), Size::new(2, 3));
        let huge = i32::MAX as usize + 5;
        assert_eq!(Axes::RowY.extent(1, huge), Size::new(i32::MAX, 1));
        assert_eq!(Axes::RowX.extent(huge, 1), Size::new(i32::MAX, 1));
    }

    #[test]
    fn size_follows_orientation() {
        let g = sample();
        assert_eq!(g.size(Axes::RowY), Size::new(3, 2));
        assert_eq!(g.size(Axes::RowX), Size::new(2, 3));
        assert!(g.contains(Point::new(2, 1), Axes::RowY));
        assert!(!g.contains(Point::new(2, 1), Axes::RowX));
        assert!(g.contains(Point::new(1, 2), Axes::RowX));
    }

    #[test]
    fn get_follows_orientation() {
        let g = sample();
        assert_eq!(g.get(Point::new(2, 0), Axes::RowY), Some(&3));
        assert_eq!(g.get(Point::new(0, 2), Axes::RowX), Some(&3));
        assert_eq!(g.get(Point::new(3, 0), Axes::RowY), None);
        assert_eq!(g.get(Point::new(-1, 0), Axes::RowY), None);
    }

    #[test]
    fn set_in_and_out_of_bounds() {
        let mut g = sample();
        g.set(Point::new(1, 1), Axes::RowY, 50);
        g.set(Point::new(9, 9), Axes::RowY, 99);
        assert_eq!(g.get(Point::new(1, 1), Axes::RowY), Some(&50));
        assert_eq!(g.cells(), &[1, 2, 3, 4, 50, 6]);
    }

    #[test]
    fn transposed_swaps_orientation() {
        let g = sample();
        let t = g.transposed();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        for p in g.size(Axes::RowY) {
            assert_eq!(g.get(p, Axes::RowY), t.get(p, Axes::RowX));
        }
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![true; 4]).is_ok());
        assert_eq!(
            Grid::from_vec(2, 2, vec![true; 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(err.to_string(), "grid: row 1 has 1 cells, expected 2");
    }

    #[test]
    fn empty_grid() {
        let g: Grid<bool> = Grid::from_rows(vec![]).unwrap();
        assert!(g.is_empty());
        assert!(g.size(Axes::RowY).is_empty());
        assert!(Grid::new(3, 0, 0.0f32).is_empty());
    }
}
