//! Shared simulation state
//!
//! Tasks never call each other; everything they share lives here and is
//! handed to each resumption through the tick context. Mutual exclusion
//! is structural - one task runs at a time - so plain fields suffice.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::START_YEAR;
use crate::sim::obstacles::{Obstacles, PendingHits};

/// Process-wide ship state: where it is, how fast it drifts, and which
/// of the two sprite frames is currently displayed.
#[derive(Debug, Clone)]
pub struct Ship {
    pub row: f32,
    pub column: f32,
    pub row_speed: f32,
    pub column_speed: f32,
    pub frame: usize,
}

/// Everything the behavior tasks share.
pub struct World {
    /// Run seed, kept for logging and reproduction.
    pub seed: u64,
    pub rng: Pcg32,
    pub ship: Ship,
    /// Active collidable debris regions.
    pub obstacles: Obstacles,
    /// Struck obstacles pending removal by their owning flight task.
    pub hits: PendingHits,
    /// Simulated year, advanced on a fixed tic cadence.
    pub year: i32,
}

impl World {
    pub fn new(seed: u64, ship_row: f32, ship_column: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship {
                row: ship_row,
                column: ship_column,
                row_speed: 0.0,
                column_speed: 0.0,
                frame: 0,
            },
            obstacles: Obstacles::default(),
            hits: PendingHits::default(),
            year: START_YEAR,
        }
    }
}
