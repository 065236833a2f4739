// src/render/mod.rs
//! Text and image output for finished grids.

pub mod ascii;
#[cfg(feature = "png")]
pub mod png;

pub use ascii::{symbol, to_ascii};
#[cfg(feature = "png")]
pub use png::{save_png, tile_color};
