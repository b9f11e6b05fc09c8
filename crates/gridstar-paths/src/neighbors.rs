use gridstar_core::Point;

use crate::traits::CostModel;

/// The eight move directions, in expansion order: the four orthogonal
/// moves (up, down, left, right) followed by the four diagonals.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// Whether the offset `d` is a diagonal move.
#[inline]
pub fn is_diagonal(d: Point) -> bool {
    d.x != 0 && d.y != 0
}

/// Whether a single move from `from` by `d` is legal.
///
/// The target must be in bounds and passable. A diagonal move additionally
/// needs both orthogonal cells sharing its corner, `(from.x + dx, from.y)`
/// and `(from.x, from.y + dy)`, to be passable, so paths never squeeze
/// between two blocked cells.
pub fn can_step<M: CostModel + ?Sized>(model: &M, from: Point, d: Point) -> bool {
    let to = from + d;
    if !model.size().contains(to) || !model.passable(to) {
        return false;
    }
    if is_diagonal(d) {
        return model.passable(from.shift(d.x, 0)) && model.passable(from.shift(0, d.y));
    }
    true
}

/// Cached successor computation helper.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Cells reachable from `p` in one legal move, in [`DIRECTIONS`] order.
    pub fn successors<M: CostModel + ?Sized>(&mut self, model: &M, p: Point) -> &[Point] {
        self.buf.clear();
        for d in DIRECTIONS {
            if can_step(model, p, d) {
                self.buf.push(p + d);
            }
        }
        &self.buf
    }
}
