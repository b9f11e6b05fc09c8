use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use gridstar_core::{Point, Size};

/// Accumulated path cost.
pub trait Cost: Copy + Debug + Add<Output = Self> {
    const ZERO: Self;

    /// Total order used by the open set and by cost comparisons.
    fn cmp_cost(&self, other: &Self) -> Ordering;
}

impl Cost for i64 {
    const ZERO: Self = 0;

    #[inline]
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Scalar models keep step costs on a fixed `1 / COST_SCALE` lattice, so
/// equal-cost routes compare [`Ordering::Equal`] here.
impl Cost for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Per-grid-kind strategy consumed by the A* engine.
pub trait CostModel {
    type Cost: Cost;

    /// Logical extent of the grid. An empty extent means there is no grid.
    fn size(&self) -> Size;

    /// Whether `p` can be entered. Must be `false` outside [`size`](Self::size).
    fn passable(&self, p: Point) -> bool;

    /// Cost of moving from `from` to the adjacent cell `to`. Must be > 0.
    fn step_cost(&self, from: Point, to: Point) -> Self::Cost;

    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> Self::Cost;
}
