// src/utils/mod.rs
pub mod geometry;
pub mod util;

pub use geometry::{Facing, Position};
pub use util::{clamp, resolve_seed, seeded_rng};
