// src/generator/walker.rs

use log::trace;
use rand::Rng;

use crate::error::GenError;
use crate::grid::{BoundingBox, Grid};
use crate::tiles::{TileCatalog, TileKind};
use crate::utils::{Facing, Position};

/// A heading choice relative to the walker's current facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Forward,
    Left,
    Right,
}

impl Turn {
    pub fn apply(self, facing: Facing) -> Facing {
        match self {
            Turn::Forward => facing,
            Turn::Left => facing.left(),
            Turn::Right => facing.right(),
        }
    }
}

/// Result of one walker tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerStatus {
    Active,
    Terminated,
}

/// Directions open to a walker this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    turns: Vec<Turn>,
    front_blocked: bool,
}

/// A random-walk agent that carves a three-wide corridor, one cell per tick.
///
/// The walker only ever borrows the grid for the length of a tick; the
/// generator owns it and outlives every walker.
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    position: Position,
    facing: Facing,
    steps: u32,
    max_steps: u32,
    rows: i32,
    columns: i32,
    catalog: &'a TileCatalog,
}

impl<'a> Walker<'a> {
    pub fn new(
        catalog: &'a TileCatalog,
        max_steps: u32,
        (rows, columns): (usize, usize),
        position: Position,
        facing: Facing,
    ) -> Self {
        Walker {
            position,
            facing,
            steps: 0,
            max_steps,
            rows: rows as i32,
            columns: columns as i32,
            catalog,
        }
    }

    /// A fresh walker starting where this one stands, facing the same way.
    pub fn branch(&self) -> Walker<'a> {
        Walker::new(
            self.catalog,
            self.max_steps,
            (self.rows as usize, self.columns as usize),
            self.position,
            self.facing,
        )
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Advances the walker one step and carves behind it.
    ///
    /// Draws from `rng` only when the heading is reconsidered: one roll
    /// against `divergence_percent` (skipped when the front is blocked or
    /// there is a single option), then one index roll if the heading changes.
    pub fn tick<R: Rng>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
        bounds: &mut BoundingBox,
        divergence_percent: u32,
    ) -> Result<WalkerStatus, GenError> {
        if self.steps >= self.max_steps {
            return Ok(WalkerStatus::Terminated);
        }

        let options = self.available_turns();
        if options.turns.is_empty() {
            trace!("Walker at {:?} has nowhere to go.", self.position);
            return Ok(WalkerStatus::Terminated);
        }

        let reconsider = options.front_blocked
            || (options.turns.len() > 1 && rng.random_range(0..=100u32) <= divergence_percent);
        if reconsider {
            // Forward sits at index 0 and is only kept when nothing else is.
            let offset = if options.front_blocked { 0 } else { 1 };
            let index = rng.random_range(offset..options.turns.len());
            self.facing = options.turns[index].apply(self.facing);
        }

        self.steps += 1;
        self.position = self.position.step(self.facing);

        let ground = self.catalog.tile(TileKind::Ground);
        let side = self.facing.right();
        for cell in [self.position, self.position.back(side), self.position.step(side)] {
            debug_assert!(self.in_bounds(cell), "walker carved off-grid at {cell:?}");
            grid.carve(cell, ground)?;
        }

        bounds.expand_point(self.position);
        trace!("Walker stepped to {:?} facing {:?}.", self.position, self.facing);
        Ok(WalkerStatus::Active)
    }

    /// Works out which turns keep the next step, and the corridor around it,
    /// on the grid. When the front is blocked the walker backs up one cell
    /// and tries to turn from there; that retreat is committed immediately.
    fn available_turns(&mut self) -> Options {
        let mut turns = Vec::with_capacity(3);
        let mut front_blocked = false;

        let ahead = self.position.step(self.facing);
        let behind = self.position.back(self.facing);

        if self.in_bounds(ahead) && self.in_bounds(behind) {
            turns.push(Turn::Forward);
            self.push_side_turns(self.position, &mut turns);
        } else {
            let retreat = behind;
            if self.in_bounds(retreat.back(self.facing)) {
                self.push_side_turns(retreat, &mut turns);
                if !turns.is_empty() {
                    front_blocked = true;
                    self.position = retreat;
                }
            }
        }

        Options {
            turns,
            front_blocked,
        }
    }

    fn push_side_turns(&self, from: Position, turns: &mut Vec<Turn>) {
        if self.in_bounds(from.step(self.facing.right())) {
            turns.push(Turn::Right);
        }
        if self.in_bounds(from.step(self.facing.left())) {
            turns.push(Turn::Left);
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.columns).contains(&pos.col)
    }
}
