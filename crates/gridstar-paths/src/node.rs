use std::cmp::Ordering;

use gridstar_core::Point;

use crate::traits::Cost;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Best known cost and predecessor of one cell.
#[derive(Clone, Copy)]
pub(crate) struct Node<C> {
    pub(crate) g: Option<C>,
    pub(crate) parent: Option<Point>,
}

impl<C> Default for Node<C> {
    fn default() -> Self {
        Self {
            g: None,
            parent: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Open set entry
// ---------------------------------------------------------------------------

/// Open-set entry, ordered for `BinaryHeap` so that the pop yields the
/// smallest `(f, h, x, y)` key.
///
/// `g` is the cost the entry was pushed with; it is not part of the key and
/// only serves to recognise entries superseded by a cheaper route.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry<C> {
    pub(crate) f: C,
    pub(crate) h: C,
    pub(crate) g: C,
    pub(crate) pos: Point,
}

impl<C: Cost> OpenEntry<C> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp_cost(&other.f)
            .then_with(|| self.h.cmp_cost(&other.h))
            .then_with(|| self.pos.x.cmp(&other.pos.x))
            .then_with(|| self.pos.y.cmp(&other.pos.y))
    }
}

impl<C: Cost> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key_cmp(self)
    }
}

impl<C: Cost> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for OpenEntry<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(f: i64, h: i64, x: i32, y: i32) -> OpenEntry<i64> {
        OpenEntry {
            f,
            h,
            g: f - h,
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn pops_in_composite_key_order() {
        let mut open = BinaryHeap::new();
        open.push(entry(3000, 2000, 1, 0));
        open.push(entry(3000, 1000, 5, 5));
        open.push(entry(2000, 2000, 9, 9));
        open.push(entry(3000, 2000, 0, 1));
        open.push(entry(3000, 2000, 0, 0));

        let order: Vec<Point> = std::iter::from_fn(|| open.pop().map(|e| e.pos)).collect();
        assert_eq!(
            order,
            vec![
                Point::new(9, 9),
                Point::new(5, 5),
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
            ]
        );
    }

    #[test]
    fn float_keys_are_totally_ordered() {
        let a = OpenEntry {
            f: 1.5f64,
            h: 0.5,
            g: 1.0,
            pos: Point::new(0, 0),
        };
        let b = OpenEntry { f: 1.25, ..a };
        assert_eq!(a.cmp(&b), Ordering::Less);
    }
}
