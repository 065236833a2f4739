// src/render/ascii.rs

use crate::grid::Grid;
use crate::tiles::TileKind;

/// Console glyph for a tile kind. Cliffs, interiors and empty cells print blank.
pub fn symbol(kind: TileKind) -> char {
    match kind {
        TileKind::Ground => '.',
        TileKind::LeftWall | TileKind::RightWall => '|',
        TileKind::TopWall | TileKind::BottomWall => '-',
        TileKind::TrCornerWall | TileKind::BlCornerWall => '\\',
        TileKind::TlCornerWall | TileKind::BrCornerWall => '/',
        _ => ' ',
    }
}

/// Renders one line per grid row, rows top to bottom.
pub fn to_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.row_count() * (grid.column_count() + 1));
    for row in grid.rows() {
        out.extend(row.iter().map(|tile| symbol(tile.kind)));
        out.push('\n');
    }
    out
}
