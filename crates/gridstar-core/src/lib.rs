//! **gridstar-core** — core types for grid pathfinding.
//!
//! This crate provides the foundational types shared by the *gridstar*
//! crates: integer [`Point`] coordinates, the [`Size`] of a grid in point
//! space, the [`Axes`] orientation flag and the dense [`Grid`] buffer that
//! holds per-cell walkability or cost, plus the [`ValueRange`] wall rule
//! shared by weighted grids.

pub mod geom;
pub mod grid;
pub mod scalar;

pub use geom::{Point, Size, SizeIter};
pub use grid::{Axes, Grid, GridError};
pub use scalar::{Scalar, ValueRange};
