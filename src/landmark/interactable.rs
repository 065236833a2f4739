// src/landmark/interactable.rs
use serde::{Deserialize, Serialize};

/// Something a landmark may host: a chest, a shrine, a lever.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interactable {
    /// Whether it may share cells with another interactable.
    pub can_overlap: bool,
    pub max_spawns: u32,
    pub required_spawns: u32,
    /// Footprint height in cells.
    pub rows: u32,
    /// Footprint width in cells.
    pub columns: u32,
}
