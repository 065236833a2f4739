// src/lib.rs

pub mod error;
pub mod generator;
pub mod grid;
pub mod landmark;
pub mod render;
pub mod tiles;
pub mod utils;

pub use error::GenError;
pub use generator::{GenerationStats, Generator, GeneratorConfig};
pub use grid::{BoundingBox, Grid, Magnification};
pub use landmark::{Interactable, LandmarkLayout, LandmarkRanges, LandmarkTemplate};
pub use tiles::{CatalogRegistry, Tile, TileCatalog, TileKind};
pub use utils::{Facing, Position};
