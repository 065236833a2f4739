// src/grid/bounds.rs

use serde::{Deserialize, Serialize};

use crate::utils::{clamp, Position};

/// Inclusive row and column watermarks of the cells walkers have visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl BoundingBox {
    /// A box covering exactly one cell.
    pub fn at(pos: Position) -> Self {
        BoundingBox {
            min_row: pos.row,
            max_row: pos.row,
            min_col: pos.col,
            max_col: pos.col,
        }
    }

    pub fn new(min_row: i32, max_row: i32, min_col: i32, max_col: i32) -> Self {
        BoundingBox {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    pub fn expand_point(&mut self, pos: Position) {
        self.min_row = self.min_row.min(pos.row);
        self.max_row = self.max_row.max(pos.row);
        self.min_col = self.min_col.min(pos.col);
        self.max_col = self.max_col.max(pos.col);
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min_row..=self.max_row).contains(&pos.row)
            && (self.min_col..=self.max_col).contains(&pos.col)
    }

    /// Grows the box by `by` cells on every side, without leaving a
    /// `rows` x `columns` grid.
    pub fn padded(&self, by: i32, rows: usize, columns: usize) -> Self {
        let last_row = rows as i32 - 1;
        let last_col = columns as i32 - 1;
        BoundingBox {
            min_row: clamp(self.min_row - by, 0, self.min_row),
            max_row: clamp(self.max_row + by, self.max_row, last_row),
            min_col: clamp(self.min_col - by, 0, self.min_col),
            max_col: clamp(self.max_col + by, self.max_col, last_col),
        }
    }

    pub fn height(&self) -> usize {
        (self.max_row - self.min_row + 1).max(0) as usize
    }

    pub fn width(&self) -> usize {
        (self.max_col - self.min_col + 1).max(0) as usize
    }
}
