//! A* shortest paths on 2D grids.
//!
//! This crate finds 8-directional shortest paths over three kinds of grid:
//!
//! - **binary** grids (`Grid<bool>`, `true` = walkable),
//! - **integer** cost grids (`Grid<i32>`),
//! - **floating-point** cost grids (`Grid<f32>` / `Grid<f64>`).
//!
//! In weighted grids the cells holding the global maximum are walls.
//! Diagonal moves never cut corners: both orthogonal cells beside a
//! diagonal step must be passable.
//!
//! The entry point is [`find_path`], which picks a cost model for the grid
//! kind and runs the single generic engine [`astar`].
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Cost`] | Accumulated cost (`i64` or `f64`) with a total order |
//! | [`CostModel`] | Walls, step costs and heuristic of one grid kind |

mod astar;
mod distance;
mod error;
mod model;
mod neighbors;
mod node;
mod traits;

pub use astar::{astar, find_path, path_cost};
pub use distance::chebyshev;
pub use error::{Endpoint, PathError};
pub use model::{BinaryModel, COST_SCALE, DIAGONAL_STEP, ORTHOGONAL_STEP, ScalarModel, Terrain};
pub use neighbors::{DIRECTIONS, Neighbors, can_step, is_diagonal};
pub use traits::{Cost, CostModel};
