// src/grid/scale.rs

use serde::{Deserialize, Serialize};

use crate::grid::{BoundingBox, Grid};
use crate::tiles::Tile;

/// Integer replication factor per axis. `(1, 1)` crops without scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magnification {
    pub rows: u32,
    pub columns: u32,
}

impl Magnification {
    pub fn new(rows: u32, columns: u32) -> Self {
        Magnification { rows, columns }
    }

    pub fn is_valid(&self) -> bool {
        self.rows >= 1 && self.columns >= 1
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Magnification::new(1, 1)
    }
}

impl Grid {
    /// Crops `region` (inclusive) out of the grid and replicates every cell
    /// into a `scale.rows` x `scale.columns` block.
    ///
    /// Source cell `(r, c)` of the region lands on rows
    /// `r * scale.rows .. (r + 1) * scale.rows` and the matching column block.
    /// Cells of the region that fall off the grid come out as default tiles.
    pub fn magnify(&self, region: &BoundingBox, scale: Magnification) -> Grid {
        let sx = scale.rows as usize;
        let sy = scale.columns as usize;
        let mut out = Grid::filled(region.height() * sx, region.width() * sy, Tile::default());

        for r in 0..region.height() {
            for c in 0..region.width() {
                let source = usize::try_from(region.min_row)
                    .ok()
                    .zip(usize::try_from(region.min_col).ok())
                    .and_then(|(row, col)| self.get(row + r, col + c))
                    .copied()
                    .unwrap_or_default();
                duplicate(&mut out, source, (sx, sy), (r, c));
            }
        }

        out
    }
}

fn duplicate(grid: &mut Grid, tile: Tile, (sx, sy): (usize, usize), (r, c): (usize, usize)) {
    for x in 0..sx {
        for y in 0..sy {
            let written = grid.set(r * sx + x, c * sy + y, tile);
            debug_assert!(written, "magnified block ({r}, {c}) overflows the output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TileKind;
    use proptest::prelude::*;

    fn numbered(rows: usize, columns: usize) -> Grid {
        let mut grid = Grid::filled(rows, columns, Tile::default());
        for r in 0..rows {
            for c in 0..columns {
                grid.set(r, c, Tile::new((r * columns + c) as u32, false, TileKind::Ground));
            }
        }
        grid
    }

    #[test]
    fn test_unit_scale_is_a_crop() {
        let grid = numbered(6, 5);
        let region = BoundingBox::new(1, 3, 2, 4);
        let out = grid.magnify(&region, Magnification::default());

        assert_eq!(out.row_count(), 3);
        assert_eq!(out.column_count(), 3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(out.get(r, c), grid.get(r + 1, c + 2));
            }
        }
    }

    #[test]
    fn test_magnify_two_by_three() {
        let grid = numbered(2, 2);
        let region = BoundingBox::new(0, 1, 0, 1);
        let out = grid.magnify(&region, Magnification::new(2, 3));

        assert_eq!(out.row_count(), 4);
        assert_eq!(out.column_count(), 6);
        assert!(out.is_rectangular());
        assert_eq!(out.get(3, 5), grid.get(1, 1));
        assert_eq!(out.get(1, 2), grid.get(0, 0));
        assert_eq!(out.get(2, 3), grid.get(1, 1));
    }

    proptest! {
        #[test]
        fn every_block_holds_its_source_cell(
            rows in 1usize..8,
            columns in 1usize..8,
            sx in 1u32..4,
            sy in 1u32..4,
        ) {
            let grid = numbered(rows, columns);
            let region = BoundingBox::new(0, rows as i32 - 1, 0, columns as i32 - 1);
            let out = grid.magnify(&region, Magnification::new(sx, sy));

            prop_assert_eq!(out.row_count(), rows * sx as usize);
            prop_assert_eq!(out.column_count(), columns * sy as usize);
            for (r, c, tile) in out.iter() {
                let source = grid.get(r / sx as usize, c / sy as usize).unwrap();
                prop_assert_eq!(tile, source);
            }
        }
    }
}
