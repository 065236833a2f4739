// src/generator/config.rs

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::grid::Magnification;

/// Smallest map, per axis, the generator will carve.
pub const MIN_MAP_SIZE: usize = 3;

/// Tuning knobs for one carving run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub columns: usize,
    /// Cap on walkers ever spawned in a run, the first one included.
    pub max_walkers: usize,
    /// Steps each walker may take before it retires.
    pub max_path_length: u32,
    /// Chance, per tick, that a walker reconsiders its heading while forward is open.
    pub divergence_percent: u32,
    pub magnification: Magnification,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            rows: 100,
            columns: 100,
            max_walkers: 4,
            max_path_length: 20,
            divergence_percent: 30,
            magnification: Magnification::default(),
        }
    }
}

impl GeneratorConfig {
    /// Checks everything that does not depend on the start position.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.rows < MIN_MAP_SIZE || self.columns < MIN_MAP_SIZE {
            return Err(GenError::MapTooSmall {
                rows: self.rows,
                columns: self.columns,
                min: MIN_MAP_SIZE,
            });
        }
        if !self.magnification.is_valid() {
            return Err(GenError::InvalidMagnification {
                rows: self.magnification.rows,
                columns: self.magnification.columns,
            });
        }
        if self.divergence_percent > 100 {
            return Err(GenError::InvalidDivergence(self.divergence_percent));
        }
        Ok(())
    }
}
