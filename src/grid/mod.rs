// src/grid/mod.rs
//! The tile grid carved by the generator and stamped by landmark templates.

pub mod bounds;
pub mod scale;

pub use bounds::BoundingBox;
pub use scale::Magnification;

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::tiles::Tile;
use crate::utils::Position;

/// A 2-D grid of tiles addressed by `(row, column)`.
///
/// Rows and columns resize independently, so a grid can be ragged while it
/// is being built. Every grid handed back by a successful generation call is
/// rectangular.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `rows` x `columns` grid of default tiles.
    pub fn filled(rows: usize, columns: usize, tile: Tile) -> Self {
        Grid {
            rows: vec![vec![tile; columns]; rows],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count of the first row, or zero for an empty grid.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Resizes the number of rows. New rows start empty.
    pub fn resize_rows(&mut self, rows: usize) {
        self.rows.resize_with(rows, Vec::new);
    }

    /// Resizes a single row, padding with default tiles.
    pub fn resize_row(&mut self, row: usize, columns: usize) {
        if let Some(cells) = self.rows.get_mut(row) {
            cells.resize(columns, Tile::default());
        }
    }

    /// Resizes to `rows` x `columns` and resets every cell to the default tile.
    pub fn reset(&mut self, rows: usize, columns: usize) {
        self.rows.clear();
        self.rows.resize_with(rows, || vec![Tile::default(); columns]);
    }

    pub fn is_rectangular(&self) -> bool {
        let columns = self.column_count();
        self.rows.iter().all(|row| row.len() == columns)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.rows.get_mut(row).and_then(|cells| cells.get_mut(col))
    }

    /// Writes `tile` at `(row, col)`. Returns `false` if the cell does not exist.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.get_mut(row, col) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Whether `pos` names an existing cell.
    pub fn contains(&self, pos: Position) -> bool {
        self.cell_index(pos).is_some()
    }

    /// Writes `tile` at a signed position, reporting a bounds fault instead of
    /// panicking when the position is off the grid.
    pub fn carve(&mut self, pos: Position, tile: Tile) -> Result<(), GenError> {
        let (rows, columns) = (self.row_count(), self.column_count());
        match self.cell_index(pos) {
            Some((row, col)) => {
                self.rows[row][col] = tile;
                Ok(())
            }
            None => Err(GenError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows,
                columns,
            }),
        }
    }

    fn cell_index(&self, pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.get(row, col).map(|_| (row, col))
    }

    /// Iterates every cell as `(row, col, tile)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        self.rows.iter().enumerate().flat_map(|(r, cells)| {
            cells.iter().enumerate().map(move |(c, tile)| (r, c, tile))
        })
    }

    /// Iterates rows as tile slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
