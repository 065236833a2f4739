// src/landmark/border.rs

use crate::tiles::TileKind;

/// The tile kinds used for each positional role around a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub left: TileKind,
    pub right: TileKind,
    pub top: TileKind,
    pub bottom: TileKind,
    pub tr_corner: TileKind,
    pub tl_corner: TileKind,
    pub br_corner: TileKind,
    pub bl_corner: TileKind,
}

impl BorderSet {
    pub const WALLS: BorderSet = BorderSet {
        left: TileKind::LeftWall,
        right: TileKind::RightWall,
        top: TileKind::TopWall,
        bottom: TileKind::BottomWall,
        tr_corner: TileKind::TrCornerWall,
        tl_corner: TileKind::TlCornerWall,
        br_corner: TileKind::BrCornerWall,
        bl_corner: TileKind::BlCornerWall,
    };

    pub const CLIFFS: BorderSet = BorderSet {
        left: TileKind::LeftCliff,
        right: TileKind::RightCliff,
        top: TileKind::TopCliff,
        bottom: TileKind::BottomCliff,
        tr_corner: TileKind::TrCornerCliff,
        tl_corner: TileKind::TlCornerCliff,
        br_corner: TileKind::BrCornerCliff,
        bl_corner: TileKind::BlCornerCliff,
    };

    /// Walls on flat ground, cliffs on anything raised.
    pub fn for_elevation(elevation: u32) -> BorderSet {
        if elevation == 0 {
            BorderSet::WALLS
        } else {
            BorderSet::CLIFFS
        }
    }

    /// The tile kind a classified cell is stamped with.
    pub fn kind_for(&self, role: CellRole) -> TileKind {
        match role {
            CellRole::TlCorner => self.tl_corner,
            CellRole::TrCorner => self.tr_corner,
            CellRole::BrCorner => self.br_corner,
            CellRole::BlCorner => self.bl_corner,
            CellRole::LeftEdge => self.left,
            CellRole::RightEdge => self.right,
            CellRole::TopEdge => self.top,
            CellRole::BottomEdge => self.bottom,
            CellRole::Passage | CellRole::Interior => TileKind::Default,
        }
    }
}

/// Which sides of a landmark were rolled open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exits {
    /// Column 0.
    pub west: bool,
    /// Last column.
    pub east: bool,
    /// Row 0.
    pub north: bool,
    /// Last row.
    pub south: bool,
}

/// What a single landmark cell turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    TlCorner,
    TrCorner,
    BrCorner,
    BlCorner,
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
    /// A border cell left open by an exit roll.
    Passage,
    Interior,
}

impl CellRole {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            CellRole::TlCorner | CellRole::TrCorner | CellRole::BrCorner | CellRole::BlCorner
        )
    }
}

fn near(value: usize, centre: usize) -> bool {
    value.abs_diff(centre) <= 1
}

/// Classifies cell `(x, y)` of a `rows` x `columns` landmark.
///
/// Precedence: exact corners, then border cells away from both centre
/// bands, then the centre-row band (column-edge gaps), then the
/// centre-column band (row-edge gaps), then interior.
pub fn classify_cell(x: usize, y: usize, rows: usize, columns: usize, exits: Exits) -> CellRole {
    let last_row = rows.saturating_sub(1);
    let last_col = columns.saturating_sub(1);
    let in_row_band = near(x, rows / 2);
    let in_col_band = near(y, columns / 2);

    if x == 0 && y == 0 {
        CellRole::TlCorner
    } else if x == last_row && y == 0 {
        CellRole::TrCorner
    } else if x == last_row && y == last_col {
        CellRole::BrCorner
    } else if x == 0 && y == last_col {
        CellRole::BlCorner
    } else if !in_row_band && !in_col_band {
        if x == 0 || x == last_row {
            CellRole::LeftEdge
        } else if y == 0 || y == last_col {
            CellRole::BottomEdge
        } else {
            CellRole::Interior
        }
    } else if in_row_band {
        if !exits.west && y == 0 {
            CellRole::TopEdge
        } else if !exits.east && y == last_col {
            CellRole::BottomEdge
        } else if y == 0 || y == last_col {
            CellRole::Passage
        } else {
            CellRole::Interior
        }
    } else if !exits.north && x == 0 {
        CellRole::LeftEdge
    } else if !exits.south && x == last_row {
        CellRole::RightEdge
    } else if x == 0 || x == last_row {
        CellRole::Passage
    } else {
        CellRole::Interior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSED: Exits = Exits {
        west: false,
        east: false,
        north: false,
        south: false,
    };
    const OPEN: Exits = Exits {
        west: true,
        east: true,
        north: true,
        south: true,
    };

    #[test]
    fn test_corners_win_regardless_of_exits() {
        for exits in [CLOSED, OPEN] {
            assert_eq!(classify_cell(0, 0, 10, 12, exits), CellRole::TlCorner);
            assert_eq!(classify_cell(9, 0, 10, 12, exits), CellRole::TrCorner);
            assert_eq!(classify_cell(9, 11, 10, 12, exits), CellRole::BrCorner);
            assert_eq!(classify_cell(0, 11, 10, 12, exits), CellRole::BlCorner);
        }
    }

    #[test]
    fn test_edges_away_from_centre() {
        assert_eq!(classify_cell(0, 2, 10, 12, CLOSED), CellRole::LeftEdge);
        assert_eq!(classify_cell(9, 2, 10, 12, CLOSED), CellRole::LeftEdge);
        assert_eq!(classify_cell(2, 0, 10, 12, CLOSED), CellRole::BottomEdge);
        assert_eq!(classify_cell(2, 11, 10, 12, CLOSED), CellRole::BottomEdge);
        assert_eq!(classify_cell(2, 2, 10, 12, CLOSED), CellRole::Interior);
    }

    #[test]
    fn test_closed_centre_bands_are_walled() {
        // Centre row band is rows 4..=6 of 10; centre column band is 5..=7 of 12.
        for x in 4..=6 {
            assert_eq!(classify_cell(x, 0, 10, 12, CLOSED), CellRole::TopEdge);
            assert_eq!(classify_cell(x, 11, 10, 12, CLOSED), CellRole::BottomEdge);
        }
        for y in 5..=7 {
            assert_eq!(classify_cell(0, y, 10, 12, CLOSED), CellRole::LeftEdge);
            assert_eq!(classify_cell(9, y, 10, 12, CLOSED), CellRole::RightEdge);
        }
    }

    #[test]
    fn test_open_exits_leave_passages() {
        for x in 4..=6 {
            assert_eq!(classify_cell(x, 0, 10, 12, OPEN), CellRole::Passage);
            assert_eq!(classify_cell(x, 11, 10, 12, OPEN), CellRole::Passage);
        }
        for y in 5..=7 {
            assert_eq!(classify_cell(0, y, 10, 12, OPEN), CellRole::Passage);
            assert_eq!(classify_cell(9, y, 10, 12, OPEN), CellRole::Passage);
        }
        assert_eq!(classify_cell(5, 6, 10, 12, OPEN), CellRole::Interior);
    }

    #[test]
    fn test_single_exit_only_opens_its_side() {
        let exits = Exits {
            east: true,
            ..CLOSED
        };
        assert_eq!(classify_cell(5, 0, 10, 12, exits), CellRole::TopEdge);
        assert_eq!(classify_cell(5, 11, 10, 12, exits), CellRole::Passage);
        assert_eq!(classify_cell(0, 6, 10, 12, exits), CellRole::LeftEdge);
    }

    #[test]
    fn test_border_set_follows_elevation() {
        assert_eq!(BorderSet::for_elevation(0), BorderSet::WALLS);
        assert_eq!(BorderSet::for_elevation(1), BorderSet::CLIFFS);
        assert_eq!(BorderSet::for_elevation(7), BorderSet::CLIFFS);
        assert_eq!(BorderSet::WALLS.kind_for(CellRole::Passage), TileKind::Default);
        assert_eq!(BorderSet::CLIFFS.kind_for(CellRole::TrCorner), TileKind::TrCornerCliff);
    }
}
