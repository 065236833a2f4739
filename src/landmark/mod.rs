// src/landmark/mod.rs
pub mod border;
pub mod interactable;
pub mod template;

pub use border::{classify_cell, BorderSet, CellRole, Exits};
pub use interactable::Interactable;
pub use template::{LandmarkLayout, LandmarkRanges, LandmarkTemplate};
