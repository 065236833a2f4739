// src/utils/geometry.rs
use serde::{Deserialize, Serialize};

/// A signed grid coordinate. Signed so a walker can look one step past an
/// edge before deciding not to go there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step along `facing`.
    pub fn step(&self, facing: Facing) -> Position {
        Position::new(self.row + facing.dr, self.col + facing.dc)
    }

    /// The cell one step against `facing`.
    pub fn back(&self, facing: Facing) -> Position {
        self.step(facing.reversed())
    }
}

/// A unit step along one grid axis: one of (±1, 0) or (0, ±1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facing {
    pub dr: i32,
    pub dc: i32,
}

impl Facing {
    pub const NORTH: Facing = Facing { dr: -1, dc: 0 };
    pub const SOUTH: Facing = Facing { dr: 1, dc: 0 };
    pub const WEST: Facing = Facing { dr: 0, dc: -1 };
    pub const EAST: Facing = Facing { dr: 0, dc: 1 };

    /// (dr, dc) -> (-dc, -dr)
    pub fn left(&self) -> Facing {
        Facing { dr: -self.dc, dc: -self.dr }
    }

    /// (dr, dc) -> (dc, dr)
    pub fn right(&self) -> Facing {
        Facing { dr: self.dc, dc: self.dr }
    }

    pub fn reversed(&self) -> Facing {
        Facing { dr: -self.dr, dc: -self.dc }
    }
}

impl Default for Facing {
    fn default() -> Self {
        Facing::EAST
    }
}
