// src/generator/mod.rs
//! # Map Generator
//!
//! Carves a map with branching random walkers:
//!
//! 1. the output is reset to the configured size and a three-cell seed strip
//!    is stamped at the start position;
//! 2. one walker heads east from the start; every pass ticks each walker
//!    alive at the start of the pass, and a walker that moved may branch a
//!    new walker, which joins on the next pass;
//! 3. once every walker has retired, the visited bounding box is padded by
//!    one cell and cropped out of the grid, magnified per axis.
//!
//! All randomness comes from one seeded stream, so a non-zero seed always
//! reproduces the same map.

pub mod config;
pub mod walker;

pub use config::{GeneratorConfig, MIN_MAP_SIZE};
pub use walker::{Turn, Walker, WalkerStatus};

use log::{debug, info};
use rand::Rng;

use crate::error::GenError;
use crate::grid::{BoundingBox, Grid, Magnification};
use crate::tiles::{CatalogRegistry, TileCatalog, TileKind};
use crate::utils::{resolve_seed, seeded_rng, Facing, Position};

/// Summary of one carving run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// The seed actually used (a time-derived one when the caller passed 0).
    pub seed: u64,
    pub passes: usize,
    pub ticks: usize,
    pub walkers_spawned: usize,
    pub walkers_retired: usize,
    /// Padded region of the carved grid that was cropped into the output.
    pub bounds: BoundingBox,
}

/// Carves maps using a named catalog from a [`CatalogRegistry`].
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    catalog_name: String,
    catalog: Option<&'a TileCatalog>,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Resolves `catalog_name` now. A missing catalog is reported by
    /// [`Generator::generate_map`], not here.
    pub fn new(registry: &'a CatalogRegistry, catalog_name: &str) -> Self {
        Self::with_config(registry, catalog_name, GeneratorConfig::default())
    }

    pub fn with_config(
        registry: &'a CatalogRegistry,
        catalog_name: &str,
        config: GeneratorConfig,
    ) -> Self {
        Generator {
            catalog_name: catalog_name.to_string(),
            catalog: registry.get(catalog_name),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_map_size(&mut self, rows: usize, columns: usize) {
        self.config.rows = rows;
        self.config.columns = columns;
    }

    pub fn set_max_path_length(&mut self, length: u32) {
        self.config.max_path_length = length;
    }

    pub fn set_max_walkers(&mut self, count: usize) {
        self.config.max_walkers = count;
    }

    pub fn set_path_divergence_percent(&mut self, percent: u32) {
        self.config.divergence_percent = percent;
    }

    pub fn set_magnification(&mut self, rows: u32, columns: u32) {
        self.config.magnification = Magnification::new(rows, columns);
    }

    pub fn map_rows(&self) -> usize {
        self.config.rows
    }

    pub fn map_columns(&self) -> usize {
        self.config.columns
    }

    pub fn max_walkers(&self) -> usize {
        self.config.max_walkers
    }

    pub fn max_path_length(&self) -> u32 {
        self.config.max_path_length
    }

    pub fn path_divergence_percent(&self) -> u32 {
        self.config.divergence_percent
    }

    pub fn magnification(&self) -> Magnification {
        self.config.magnification
    }

    /// Carves a map into `out`, starting at `start`.
    ///
    /// `seed == 0` picks a time-derived seed; any other seed reproduces the
    /// same map for the same configuration. On error `out` is left untouched.
    pub fn generate_map(
        &self,
        out: &mut Grid,
        start: Position,
        seed: u64,
    ) -> Result<GenerationStats, GenError> {
        let catalog = self
            .catalog
            .ok_or_else(|| GenError::CatalogNotFound(self.catalog_name.clone()))?;
        self.config.validate()?;
        self.check_start(start)?;

        let (rows, columns) = (self.config.rows, self.config.columns);
        let seed = resolve_seed(seed);
        info!(
            "Generating {}x{} map from {:?} with seed {} (catalog '{}').",
            rows, columns, start, seed, self.catalog_name
        );

        let mut grid = Grid::filled(rows, columns, Default::default());
        let ground = catalog.tile(TileKind::Ground);
        for row in start.row - 1..=start.row + 1 {
            grid.carve(Position::new(row, start.col), ground)?;
        }

        let mut rng = seeded_rng(seed);
        let mut bounds = BoundingBox::at(start);
        let mut active = vec![Walker::new(
            catalog,
            self.config.max_path_length,
            (rows, columns),
            start,
            Facing::EAST,
        )];
        let mut stats = GenerationStats {
            seed,
            passes: 0,
            ticks: 0,
            walkers_spawned: 1,
            walkers_retired: 0,
            bounds,
        };

        while !active.is_empty() {
            stats.passes += 1;
            let mut survivors = Vec::with_capacity(active.len());
            let mut spawned_next_pass = Vec::new();

            for mut walker in active.drain(..) {
                stats.ticks += 1;
                match walker.tick(&mut grid, &mut rng, &mut bounds, self.config.divergence_percent)? {
                    WalkerStatus::Terminated => {
                        stats.walkers_retired += 1;
                        debug!(
                            "Walker retired at {:?} after {} steps.",
                            walker.position(),
                            walker.steps()
                        );
                    }
                    WalkerStatus::Active => {
                        if stats.walkers_spawned < self.config.max_walkers
                            && rng.random_range(0..=1u32) == 1
                        {
                            stats.walkers_spawned += 1;
                            debug!(
                                "Branched walker #{} at {:?}.",
                                stats.walkers_spawned,
                                walker.position()
                            );
                            spawned_next_pass.push(walker.branch());
                        }
                        survivors.push(walker);
                    }
                }
            }

            survivors.append(&mut spawned_next_pass);
            active = survivors;
        }

        let region = bounds.padded(1, rows, columns);
        stats.bounds = region;
        *out = grid.magnify(&region, self.config.magnification);

        info!(
            "Carved {}x{} region into a {}x{} map ({} walkers, {} ticks).",
            region.height(),
            region.width(),
            out.row_count(),
            out.column_count(),
            stats.walkers_spawned,
            stats.ticks
        );
        Ok(stats)
    }

    fn check_start(&self, start: Position) -> Result<(), GenError> {
        // Widened so extreme caller coordinates cannot overflow.
        let (row, col) = (i64::from(start.row), i64::from(start.col));
        let rows = self.config.rows as i64;
        let columns = self.config.columns as i64;
        let fits = row >= 1 && row + 1 < rows && (0..columns).contains(&col);
        if fits {
            Ok(())
        } else {
            Err(GenError::InvalidStart {
                row: start.row,
                col: start.col,
                rows: self.config.rows,
                columns: self.config.columns,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Tile;
    use proptest::prelude::*;

    fn registry() -> CatalogRegistry {
        let mut registry = CatalogRegistry::new();
        registry.create("grasslands", Tile::new(0, true, TileKind::Ground));
        registry
    }

    fn ground_count(grid: &Grid) -> usize {
        grid.iter()
            .filter(|(_, _, t)| t.kind == TileKind::Ground)
            .count()
    }

    #[test]
    fn test_zero_path_length_leaves_only_seed_strip() {
        let registry = registry();
        let mut generator = Generator::new(&registry, "grasslands");
        generator.set_map_size(10, 10);
        generator.set_max_walkers(1);
        generator.set_max_path_length(0);

        let mut grid = Grid::new();
        let stats = generator
            .generate_map(&mut grid, Position::new(5, 5), 42)
            .unwrap();

        assert_eq!(stats.seed, 42);
        assert_eq!(stats.walkers_spawned, 1);
        assert_eq!(stats.ticks, 1);
        assert_eq!(stats.bounds, BoundingBox::new(4, 6, 4, 6));

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(ground_count(&grid), 3);
        for row in 0..3 {
            assert_eq!(grid.get(row, 1).unwrap().kind, TileKind::Ground);
        }
    }

    #[test]
    fn test_missing_catalog_leaves_output_untouched() {
        let registry = registry();
        let generator = Generator::new(&registry, "tundra");
        let mut grid = Grid::filled(2, 2, Tile::new(9, true, TileKind::Ground));
        let before = grid.clone();

        let err = generator
            .generate_map(&mut grid, Position::new(50, 50), 1)
            .unwrap_err();
        assert_eq!(err, GenError::CatalogNotFound("tundra".to_string()));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_undersized_map_is_rejected() {
        let registry = registry();
        let mut generator = Generator::new(&registry, "grasslands");
        generator.set_map_size(2, 100);
        let mut grid = Grid::new();

        assert!(matches!(
            generator.generate_map(&mut grid, Position::new(1, 1), 1),
            Err(GenError::MapTooSmall { .. })
        ));
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_start_on_edge_row_is_rejected() {
        let registry = registry();
        let generator = Generator::new(&registry, "grasslands");
        let mut grid = Grid::new();

        for start in [Position::new(0, 5), Position::new(99, 5), Position::new(5, 100)] {
            assert!(matches!(
                generator.generate_map(&mut grid, start, 1),
                Err(GenError::InvalidStart { .. })
            ));
        }
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_extreme_start_is_rejected() {
        let registry = registry();
        let generator = Generator::new(&registry, "grasslands");
        let mut grid = Grid::filled(2, 2, Tile::new(9, true, TileKind::Ground));
        let before = grid.clone();

        for start in [
            Position::new(i32::MAX, 5),
            Position::new(i32::MIN, 5),
            Position::new(5, i32::MAX),
            Position::new(5, i32::MIN),
        ] {
            assert!(matches!(
                generator.generate_map(&mut grid, start, 1),
                Err(GenError::InvalidStart { .. })
            ));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_same_seed_same_map() {
        let registry = registry();
        let mut generator = Generator::new(&registry, "grasslands");
        generator.set_map_size(60, 60);
        generator.set_max_walkers(6);
        generator.set_max_path_length(80);
        generator.set_path_divergence_percent(60);

        let mut first = Grid::new();
        let mut second = Grid::new();
        let a = generator.generate_map(&mut first, Position::new(30, 30), 1234).unwrap();
        let b = generator.generate_map(&mut second, Position::new(30, 30), 1234).unwrap();

        assert_eq!(first, second);
        assert_eq!(a, b);
    }

    #[test]
    fn test_magnification_scales_output() {
        let registry = registry();
        let mut generator = Generator::new(&registry, "grasslands");
        generator.set_map_size(40, 40);
        generator.set_max_path_length(15);

        let mut plain = Grid::new();
        let stats = generator.generate_map(&mut plain, Position::new(20, 20), 77).unwrap();

        generator.set_magnification(2, 3);
        let mut scaled = Grid::new();
        let scaled_stats = generator.generate_map(&mut scaled, Position::new(20, 20), 77).unwrap();

        assert_eq!(stats.bounds, scaled_stats.bounds);
        assert_eq!(scaled.row_count(), plain.row_count() * 2);
        assert_eq!(scaled.column_count(), plain.column_count() * 3);
        for (r, c, tile) in scaled.iter() {
            assert_eq!(Some(tile), plain.get(r / 2, c / 3));
        }
    }

    #[test]
    fn test_walker_cap_limits_branching() {
        let registry = registry();
        let mut generator = Generator::new(&registry, "grasslands");
        generator.set_map_size(80, 80);
        generator.set_max_walkers(3);
        generator.set_max_path_length(30);

        let mut grid = Grid::new();
        let stats = generator.generate_map(&mut grid, Position::new(40, 40), 5).unwrap();
        assert!(stats.walkers_spawned <= 3);
        assert_eq!(stats.walkers_spawned, stats.walkers_retired);
    }

    #[test]
    fn test_getters_reflect_setters() {
        let registry = registry();
        let mut generator = Generator::new(&registry, "grasslands");
        generator.set_map_size(12, 34);
        generator.set_max_walkers(5);
        generator.set_max_path_length(1000);
        generator.set_path_divergence_percent(60);
        generator.set_magnification(2, 2);

        assert_eq!(generator.map_rows(), 12);
        assert_eq!(generator.map_columns(), 34);
        assert_eq!(generator.max_walkers(), 5);
        assert_eq!(generator.max_path_length(), 1000);
        assert_eq!(generator.path_divergence_percent(), 60);
        assert_eq!(generator.magnification(), Magnification::new(2, 2));
        assert_eq!(generator.config().rows, 12);
        assert_eq!(generator.config().validate(), Ok(()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn carving_stays_on_the_grid_and_terminates(
            seed in 1u64..10_000,
            rows in 3usize..40,
            columns in 3usize..40,
            max_walkers in 1usize..6,
            max_path_length in 0u32..120,
            divergence in 0u32..=100,
            start_row in any::<prop::sample::Index>(),
            start_col in any::<prop::sample::Index>(),
        ) {
            let registry = registry();
            let config = GeneratorConfig {
                rows,
                columns,
                max_walkers,
                max_path_length,
                divergence_percent: divergence,
                magnification: Magnification::default(),
            };
            let generator = Generator::with_config(&registry, "grasslands", config);
            // Any row with a neighbour on both sides, any column, edges included.
            let start = Position::new(
                start_row.index(rows - 2) as i32 + 1,
                start_col.index(columns) as i32,
            );

            let mut grid = Grid::new();
            // An off-grid carve would surface as GenError::OutOfBounds.
            let stats = generator.generate_map(&mut grid, start, seed).unwrap();

            prop_assert!(grid.is_rectangular());
            prop_assert!(stats.walkers_spawned <= max_walkers.max(1));
            prop_assert!(stats.ticks <= stats.walkers_spawned * (max_path_length as usize + 1));
            prop_assert!(ground_count(&grid) >= 3);
            prop_assert!(grid.row_count() <= rows && grid.column_count() <= columns);
        }

        #[test]
        fn fixed_seed_is_reproducible(seed in 1u64..10_000) {
            let registry = registry();
            let mut generator = Generator::new(&registry, "grasslands");
            generator.set_map_size(30, 30);
            generator.set_max_path_length(40);

            let mut a = Grid::new();
            let mut b = Grid::new();
            generator.generate_map(&mut a, Position::new(15, 15), seed).unwrap();
            generator.generate_map(&mut b, Position::new(15, 15), seed).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
