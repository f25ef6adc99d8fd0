//! Behavior tasks
//!
//! Each long-running routine of the game is an explicit state machine:
//! its progress (phase, counters, position, last-drawn frame) lives in
//! its fields and advances one tick per resumption. Tasks only ever talk
//! through the shared world - the obstacle registry, the pending-hit set,
//! the ship state and the year counter.

pub mod explosion;
pub mod fire;
pub mod game_over;
pub mod garbage;
pub mod ship;
pub mod stars;
pub mod years;

pub use explosion::Explosion;
pub use fire::Bolt;
pub use game_over::GameOverBanner;
pub use garbage::{DebrisFlight, DebrisSpawner};
pub use ship::{ShipAnimator, ShipController};
pub use stars::{Star, create_stars};
pub use years::{YearCaption, YearCounter};
