use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::{Axes, Point};
use log::{debug, trace};

use crate::distance::chebyshev;
use crate::error::{Endpoint, PathError};
use crate::model::{BinaryModel, ScalarModel, Terrain};
use crate::neighbors::{Neighbors, can_step};
use crate::node::{Node, OpenEntry};
use crate::traits::{Cost, CostModel};

/// Compute the shortest 8-directional path from `start` to `end`.
///
/// `grid` is any supported grid kind; the matching cost model is chosen
/// here. `axes` decides how points address the grid buffer and applies to
/// the endpoints, every grid access and the returned coordinates alike.
///
/// Returns the full path (including both endpoints), or an empty path when
/// an endpoint is a wall or the target is unreachable.
///
/// # Errors
///
/// [`PathError::MissingGrid`] if the grid has no cells and
/// [`PathError::OutOfRange`] if `start` or `end` is outside the grid.
pub fn find_path<'a>(
    start: Point,
    end: Point,
    grid: impl Into<Terrain<'a>>,
    axes: Axes,
) -> Result<Vec<Point>, PathError> {
    match grid.into() {
        Terrain::Binary(g) => astar(start, end, &BinaryModel::new(g, axes)),
        Terrain::Int(g) => astar(start, end, &ScalarModel::new(g, axes)),
        Terrain::Float(g) => astar(start, end, &ScalarModel::new(g, axes)),
        Terrain::Double(g) => astar(start, end, &ScalarModel::new(g, axes)),
    }
}

/// A* over an arbitrary [`CostModel`].
///
/// The open set is ordered by `(f, h, x, y)`, so among equally promising
/// cells the one closer to the goal wins, then the smaller coordinates.
/// All search state lives for this call only.
pub fn astar<M: CostModel + ?Sized>(
    start: Point,
    end: Point,
    model: &M,
) -> Result<Vec<Point>, PathError> {
    let size = model.size();
    if size.is_empty() {
        return Err(PathError::MissingGrid);
    }
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !size.contains(point) {
            return Err(PathError::OutOfRange {
                endpoint,
                point,
                size,
            });
        }
    }

    debug!("astar: {start} -> {end} on {size} grid");

    if !model.passable(start) || !model.passable(end) {
        debug!("astar: endpoint is a wall");
        return Ok(Vec::new());
    }
    if start == end {
        return Ok(vec![start]);
    }

    // Both endpoints are in bounds, so every index below is too.
    let idx = |p: Point| p.y as usize * size.width as usize + p.x as usize;

    let mut nodes: Vec<Node<M::Cost>> = vec![Node::default(); size.len()];
    nodes[idx(start)].g = Some(M::Cost::ZERO);

    let h = model.estimate(start, end);
    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        f: h,
        h,
        g: M::Cost::ZERO,
        pos: start,
    });

    let mut nbuf = Neighbors::new();
    let mut expanded = 0usize;

    while let Some(current) = open.pop() {
        let cp = current.pos;

        // Skip entries superseded by a cheaper route.
        match nodes[idx(cp)].g {
            Some(g) if g.cmp_cost(&current.g) == Ordering::Equal => {}
            _ => continue,
        }

        if cp == end {
            let path = reconstruct(&nodes, end, idx);
            debug!(
                "astar: found path of {} cells, cost {:?}, {expanded} expanded",
                path.len(),
                current.g
            );
            return Ok(path);
        }

        expanded += 1;
        trace!("astar: expand {cp} g={:?} f={:?}", current.g, current.f);

        for &np in nbuf.successors(model, cp) {
            let tentative_g = current.g + model.step_cost(cp, np);
            let n = &mut nodes[idx(np)];
            if let Some(g) = n.g {
                if tentative_g.cmp_cost(&g) != Ordering::Less {
                    continue;
                }
            }
            n.g = Some(tentative_g);
            n.parent = Some(cp);

            let h = model.estimate(np, end);
            open.push(OpenEntry {
                f: tentative_g + h,
                h,
                g: tentative_g,
                pos: np,
            });
        }
    }

    debug!("astar: {end} unreachable from {start}, {expanded} expanded");
    Ok(Vec::new())
}

fn reconstruct<C>(nodes: &[Node<C>], end: Point, idx: impl Fn(Point) -> usize) -> Vec<Point> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(parent) = nodes[idx(cur)].parent {
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    path
}

/// Total cost of walking `path` under `model`.
///
/// Returns `None` for an empty path or if any step is not a legal move
/// (not adjacent, out of bounds, into a wall, or cutting a corner).
pub fn path_cost<M: CostModel + ?Sized>(model: &M, path: &[Point]) -> Option<M::Cost> {
    let first = *path.first()?;
    if !model.size().contains(first) || !model.passable(first) {
        return None;
    }
    let mut total = M::Cost::ZERO;
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        if chebyshev(a, b) != 1 || !can_step(model, a, b - a) {
            return None;
        }
        total = total + model.step_cost(a, b);
    }
    Some(total)
}
