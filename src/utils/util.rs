//! # Utility Module
//!
//! Small helpers shared by the map generator and the landmark templates.
//!
//! ## `clamp`
//!
//! Restricts a value to lie within a range. Used when padding the carved
//! bounding box so the padding never leaves the grid.
//!
//! ## `resolve_seed` / `seeded_rng`
//!
//! A caller seed of `0` means "pick one for me": it is replaced with a
//! time-derived seed. Any other seed is used verbatim so runs reproduce.

use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Clamps a value between a minimum and maximum.
///
/// # Arguments
///
/// * `value` - The input value to be clamped.
/// * `min` - The minimum allowable value.
/// * `max` - The maximum allowable value.
///
/// # Examples
///
/// ```
/// use tile_carver::utils::util::clamp;
///
/// assert_eq!(clamp(5, 0, 10), 5);
/// assert_eq!(clamp(-5, 0, 10), 0);
/// assert_eq!(clamp(15, 0, 10), 10);
/// ```
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns `seed`, or a seed derived from the wall clock when `seed` is zero.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(1);
    let seed = now.max(1);
    info!("No seed supplied, using time-derived seed {}.", seed);
    seed
}

/// The single random stream a generation call draws from.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
