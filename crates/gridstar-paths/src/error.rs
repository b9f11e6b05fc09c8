use std::fmt;

use gridstar_core::{Point, Size};

/// Which end of a search a [`PathError::OutOfRange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Caller errors rejected before any search work begins.
///
/// An unreachable target is not an error: searches report it as an empty
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint lies outside the grid under the active orientation.
    OutOfRange {
        endpoint: Endpoint,
        point: Point,
        size: Size,
    },
    /// No grid to search: it has zero rows or zero columns.
    MissingGrid,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                endpoint,
                point,
                size,
            } => write!(f, "{endpoint} point {point} is outside the {size} grid"),
            Self::MissingGrid => f.write_str("no grid to search"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = PathError::OutOfRange {
            endpoint: Endpoint::End,
            point: Point::new(5, -1),
            size: Size::new(4, 3),
        };
        assert_eq!(e.to_string(), "end point (5, -1) is outside the 4x3 grid");
        assert_eq!(PathError::MissingGrid.to_string(), "no grid to search");
    }
}
