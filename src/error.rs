// src/error.rs

use thiserror::Error;

/// Errors reported by catalog registration, map carving and landmark stamping.
///
/// Every variant except [`GenError::OutOfBounds`] is a precondition failure:
/// it is returned before any caller-owned grid is touched, so the caller can
/// fix the configuration and call again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("tile catalog `{0}` is not registered")]
    CatalogNotFound(String),

    #[error("catalog holds {given} tiles but only {max} tile kinds exist")]
    TooManyTiles { given: usize, max: usize },

    #[error("tile kind ordinal {0} is out of range")]
    UnknownTileKind(usize),

    #[error("map size {rows}x{columns} is below the {min}x{min} minimum")]
    MapTooSmall { rows: usize, columns: usize, min: usize },

    #[error("magnification must be at least 1 on both axes, got ({rows}, {columns})")]
    InvalidMagnification { rows: u32, columns: u32 },

    #[error("divergence percentage {0} is outside 0..=100")]
    InvalidDivergence(u32),

    #[error("start position ({row}, {col}) leaves no room for the seed strip in a {rows}x{columns} map")]
    InvalidStart {
        row: i32,
        col: i32,
        rows: usize,
        columns: usize,
    },

    #[error("{what} range [{min}, {max}] is invalid")]
    InvalidRange {
        what: &'static str,
        min: u32,
        max: u32,
    },

    /// A walker tried to carve outside the grid. This is an internal fault;
    /// the walker's turn checks are meant to make it unreachable.
    #[error("walker addressed ({row}, {col}) outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        columns: usize,
    },
}
