// src/tiles/catalog.rs

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::tiles::{Tile, TileKind};

/// A table mapping each [`TileKind`] to the concrete [`Tile`] stamped for it.
///
/// Kinds without an entry fall back to the catalog's default tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileCatalog {
    default_tile: Tile,
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// Creates a catalog with one generic tile per terrain kind.
    ///
    /// Ground is the only walkable kind, and every cliff kind sits at
    /// elevation 1.
    pub fn new(default_tile: Tile) -> Self {
        let tiles = TileKind::ALL[..TileKind::TERRAIN_COUNT]
            .iter()
            .map(|&kind| {
                let elevation = if kind.index() >= TileKind::LeftCliff.index() { 1 } else { 0 };
                Tile::new(elevation, kind == TileKind::Ground, kind)
            })
            .collect();

        TileCatalog {
            default_tile,
            tiles,
        }
    }

    /// Creates a catalog from an explicit ordinal-indexed tile table.
    pub fn with_tiles(default_tile: Tile, tiles: Vec<Tile>) -> Result<Self, GenError> {
        if tiles.len() > TileKind::COUNT {
            return Err(GenError::TooManyTiles {
                given: tiles.len(),
                max: TileKind::COUNT,
            });
        }
        Ok(TileCatalog {
            default_tile,
            tiles,
        })
    }

    pub fn tile(&self, kind: TileKind) -> Tile {
        self.tiles
            .get(kind.index())
            .copied()
            .unwrap_or(self.default_tile)
    }

    pub fn default_tile(&self) -> Tile {
        self.default_tile
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
