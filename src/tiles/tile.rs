// src/tiles/tile.rs

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Every kind of tile a grid can hold, in catalog ordinal order.
///
/// The ordinal (`kind as usize`) is the index into a [`TileCatalog`](super::TileCatalog)
/// tile table. Cliff kinds only show up on elevated ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Ground = 0,
    LeftWall,
    RightWall,
    TopWall,
    BottomWall,
    TrCornerWall,
    TlCornerWall,
    BrCornerWall,
    BlCornerWall,
    LeftCliff,
    RightCliff,
    TopCliff,
    BottomCliff,
    TrCornerCliff,
    TlCornerCliff,
    BrCornerCliff,
    BlCornerCliff,
    Interactable,
    Default,
    Empty,
}

impl TileKind {
    /// All kinds, indexed by ordinal.
    pub const ALL: [TileKind; 20] = [
        TileKind::Ground,
        TileKind::LeftWall,
        TileKind::RightWall,
        TileKind::TopWall,
        TileKind::BottomWall,
        TileKind::TrCornerWall,
        TileKind::TlCornerWall,
        TileKind::BrCornerWall,
        TileKind::BlCornerWall,
        TileKind::LeftCliff,
        TileKind::RightCliff,
        TileKind::TopCliff,
        TileKind::BottomCliff,
        TileKind::TrCornerCliff,
        TileKind::TlCornerCliff,
        TileKind::BrCornerCliff,
        TileKind::BlCornerCliff,
        TileKind::Interactable,
        TileKind::Default,
        TileKind::Empty,
    ];

    /// Number of tile kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Kinds below this ordinal are terrain: ground, walls and cliffs.
    pub const TERRAIN_COUNT: usize = TileKind::Interactable as usize;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_wall(self) -> bool {
        (TileKind::LeftWall.index()..=TileKind::BlCornerWall.index()).contains(&self.index())
    }

    pub fn is_cliff(self) -> bool {
        (TileKind::LeftCliff.index()..=TileKind::BlCornerCliff.index()).contains(&self.index())
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            TileKind::TrCornerWall
                | TileKind::TlCornerWall
                | TileKind::BrCornerWall
                | TileKind::BlCornerWall
                | TileKind::TrCornerCliff
                | TileKind::TlCornerCliff
                | TileKind::BrCornerCliff
                | TileKind::BlCornerCliff
        )
    }
}

impl TryFrom<usize> for TileKind {
    type Error = GenError;

    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        TileKind::ALL
            .get(ordinal)
            .copied()
            .ok_or(GenError::UnknownTileKind(ordinal))
    }
}

/// A concrete tile: how high it sits, whether it can be walked on, and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub elevation: u32,
    pub walkable: bool,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(elevation: u32, walkable: bool, kind: TileKind) -> Self {
        Tile {
            elevation,
            walkable,
            kind,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::new(0, false, TileKind::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_round_trip_through_all() {
        for (ordinal, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), ordinal);
            assert_eq!(TileKind::try_from(ordinal), Ok(*kind));
        }
    }

    #[test]
    fn test_out_of_range_ordinal_is_rejected() {
        assert_eq!(
            TileKind::try_from(TileKind::COUNT),
            Err(GenError::UnknownTileKind(TileKind::COUNT))
        );
    }

    #[test]
    fn test_wall_and_cliff_families_are_disjoint() {
        for kind in TileKind::ALL {
            assert!(!(kind.is_wall() && kind.is_cliff()), "{kind:?}");
        }
        assert_eq!(TileKind::ALL.iter().filter(|k| k.is_wall()).count(), 8);
        assert_eq!(TileKind::ALL.iter().filter(|k| k.is_cliff()).count(), 8);
        assert_eq!(TileKind::ALL.iter().filter(|k| k.is_corner()).count(), 8);
        assert_eq!(TileKind::TERRAIN_COUNT, 17);
    }

    #[test]
    fn test_default_tile_is_empty_and_blocked() {
        let tile = Tile::default();
        assert_eq!(tile.elevation, 0);
        assert!(!tile.walkable);
        assert_eq!(tile.kind, TileKind::Empty);
    }
}
