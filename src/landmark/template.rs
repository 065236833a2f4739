// src/landmark/template.rs

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::grid::Grid;
use crate::landmark::border::{classify_cell, BorderSet, CellRole, Exits};
use crate::landmark::Interactable;
use crate::tiles::{CatalogRegistry, TileCatalog};
use crate::utils::{resolve_seed, seeded_rng, Position};

/// Inclusive size and elevation ranges a landmark is rolled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkRanges {
    pub rows: (u32, u32),
    pub columns: (u32, u32),
    pub elevation: (u32, u32),
}

impl LandmarkRanges {
    pub fn validate(&self) -> Result<(), GenError> {
        check_size("row", self.rows)?;
        check_size("column", self.columns)?;
        let (min, max) = self.elevation;
        if min > max {
            return Err(GenError::InvalidRange {
                what: "elevation",
                min,
                max,
            });
        }
        Ok(())
    }
}

fn check_size(what: &'static str, (min, max): (u32, u32)) -> Result<(), GenError> {
    if min == 0 || max == 0 || min > max {
        return Err(GenError::InvalidRange { what, min, max });
    }
    Ok(())
}

/// The values rolled for one landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkLayout {
    pub rows: usize,
    pub columns: usize,
    pub elevation: u32,
    pub exits: Exits,
}

/// A recipe for bordered rectangular rooms: walled on flat ground, cliff
/// edged when raised, with up to four gaps in the middle of its sides.
#[derive(Debug, Clone)]
pub struct LandmarkTemplate<'a> {
    registry: &'a CatalogRegistry,
    catalog_name: String,
    catalog: Option<&'a TileCatalog>,
    ranges: LandmarkRanges,
    interactables: Vec<Interactable>,
    exit_positions: Vec<Position>,
}

impl<'a> LandmarkTemplate<'a> {
    pub fn new(registry: &'a CatalogRegistry, catalog_name: &str) -> Self {
        LandmarkTemplate {
            registry,
            catalog_name: catalog_name.to_string(),
            catalog: registry.get(catalog_name),
            ranges: LandmarkRanges::default(),
            interactables: Vec::new(),
            exit_positions: Vec::new(),
        }
    }

    /// Template with row and column ranges set up front.
    pub fn with_sizes(
        registry: &'a CatalogRegistry,
        catalog_name: &str,
        rows: (u32, u32),
        columns: (u32, u32),
    ) -> Self {
        let mut template = Self::new(registry, catalog_name);
        template.set_row_range(rows.0, rows.1);
        template.set_column_range(columns.0, columns.1);
        template
    }

    pub fn set_catalog(&mut self, catalog_name: &str) {
        self.catalog_name = catalog_name.to_string();
        self.catalog = self.registry.get(catalog_name);
    }

    pub fn set_row_range(&mut self, min: u32, max: u32) {
        self.ranges.rows = (min, max);
    }

    pub fn set_column_range(&mut self, min: u32, max: u32) {
        self.ranges.columns = (min, max);
    }

    pub fn set_elevation_range(&mut self, min: u32, max: u32) {
        self.ranges.elevation = (min, max);
    }

    pub fn set_ranges(&mut self, ranges: LandmarkRanges) {
        self.ranges = ranges;
    }

    pub fn ranges(&self) -> LandmarkRanges {
        self.ranges
    }

    pub fn row_range(&self) -> (u32, u32) {
        self.ranges.rows
    }

    pub fn column_range(&self) -> (u32, u32) {
        self.ranges.columns
    }

    pub fn elevation_range(&self) -> (u32, u32) {
        self.ranges.elevation
    }

    pub fn add_interactable(&mut self, interactable: Interactable) {
        self.interactables.push(interactable);
    }

    pub fn add_interactables<I>(&mut self, interactables: I)
    where
        I: IntoIterator<Item = Interactable>,
    {
        self.interactables.extend(interactables);
    }

    pub fn clear_interactables(&mut self) {
        self.interactables.clear();
    }

    pub fn interactable(&self, index: usize) -> Option<&Interactable> {
        self.interactables.get(index)
    }

    pub fn interactables(&self) -> &[Interactable] {
        &self.interactables
    }

    /// Border cells left open by the last successful run.
    pub fn exit_positions(&self) -> &[Position] {
        &self.exit_positions
    }

    /// Rolls a landmark and stamps it into `out`, replacing its contents.
    ///
    /// Rolls are drawn in a fixed order: rows, columns, elevation, then the
    /// west, east, north and south exits. On error `out` is left untouched.
    pub fn generate_landmark(&mut self, out: &mut Grid, seed: u64) -> Result<LandmarkLayout, GenError> {
        let catalog = self
            .catalog
            .ok_or_else(|| GenError::CatalogNotFound(self.catalog_name.clone()))?;
        self.ranges.validate()?;

        let seed = resolve_seed(seed);
        let mut rng = seeded_rng(seed);
        let ranges = self.ranges;

        let rows = rng.random_range(ranges.rows.0..=ranges.rows.1) as usize;
        let columns = rng.random_range(ranges.columns.0..=ranges.columns.1) as usize;
        let elevation = rng.random_range(ranges.elevation.0..=ranges.elevation.1);
        let mut roll_exit = || rng.random_range(0..=1u32) == 1;
        let exits = Exits {
            west: roll_exit(),
            east: roll_exit(),
            north: roll_exit(),
            south: roll_exit(),
        };
        debug!(
            "Landmark rolls: {}x{} at elevation {}, exits {:?} (seed {}).",
            rows, columns, elevation, exits, seed
        );

        let border = BorderSet::for_elevation(elevation);
        self.exit_positions.clear();
        out.reset(rows, columns);
        for x in 0..rows {
            for y in 0..columns {
                let role = classify_cell(x, y, rows, columns, exits);
                if role == CellRole::Passage {
                    self.exit_positions.push(Position::new(x as i32, y as i32));
                }
                out.set(x, y, catalog.tile(border.kind_for(role)));
            }
        }

        info!(
            "Stamped {}x{} landmark with {} exit cells.",
            rows,
            columns,
            self.exit_positions.len()
        );
        Ok(LandmarkLayout {
            rows,
            columns,
            elevation,
            exits,
        })
    }
}
