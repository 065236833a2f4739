// src/render/png.rs

use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

use crate::grid::Grid;
use crate::tiles::{Tile, TileKind};

/// Colour used for a tile in PNG exports.
pub fn tile_color(tile: &Tile) -> Rgb<u8> {
    match tile.kind {
        TileKind::Ground => Rgb([112, 168, 84]),
        TileKind::Interactable => Rgb([214, 178, 62]),
        TileKind::Default => Rgb([150, 132, 104]),
        TileKind::Empty => Rgb([24, 24, 28]),
        kind if kind.is_wall() => Rgb([120, 120, 128]),
        // Raised cliffs get lighter with height.
        _ => {
            let lift = (tile.elevation.min(8) * 12) as u8;
            Rgb([96 + lift, 76 + lift, 60 + lift])
        }
    }
}

/// Writes the grid as an image, `cell_size` pixels per tile.
pub fn save_png<P: AsRef<Path>>(grid: &Grid, path: P, cell_size: u32) -> ImageResult<()> {
    let cell = cell_size.max(1);
    let width = grid.column_count() as u32 * cell;
    let height = grid.row_count() as u32 * cell;

    let img = RgbImage::from_fn(width, height, |x, y| {
        grid.get((y / cell) as usize, (x / cell) as usize)
            .map(tile_color)
            .unwrap_or(Rgb([0, 0, 0]))
    });
    img.save(path)
}
