// src/tiles/mod.rs
pub mod catalog;
pub mod registry;
pub mod tile;

pub use catalog::TileCatalog;
pub use registry::CatalogRegistry;
pub use tile::{Tile, TileKind};
