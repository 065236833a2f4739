// src/tiles/registry.rs

use std::collections::HashMap;

use log::{info, warn};

use crate::error::GenError;
use crate::tiles::{Tile, TileCatalog};

/// Owns named [`TileCatalog`]s.
///
/// Generators and landmark templates look catalogs up by name when they are
/// constructed, so every catalog must be registered before that.
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    catalogs: HashMap<String, TileCatalog>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generic catalog under `name`.
    ///
    /// Returns `false` and leaves the existing catalog alone if the name is taken.
    pub fn create(&mut self, name: &str, default_tile: Tile) -> bool {
        self.insert(name, TileCatalog::new(default_tile))
    }

    /// Registers a catalog built from an explicit tile table.
    pub fn create_with_tiles(
        &mut self,
        name: &str,
        default_tile: Tile,
        tiles: Vec<Tile>,
    ) -> Result<bool, GenError> {
        let catalog = TileCatalog::with_tiles(default_tile, tiles)?;
        Ok(self.insert(name, catalog))
    }

    fn insert(&mut self, name: &str, catalog: TileCatalog) -> bool {
        if self.catalogs.contains_key(name) {
            warn!("Tile catalog '{}' is already registered.", name);
            return false;
        }
        info!("Registered tile catalog '{}' ({} tiles).", name, catalog.len());
        self.catalogs.insert(name.to_string(), catalog);
        true
    }

    pub fn get(&self, name: &str) -> Option<&TileCatalog> {
        self.catalogs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.catalogs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Releases every stored catalog.
    pub fn remove_all(&mut self) {
        self.catalogs.clear();
    }
}
