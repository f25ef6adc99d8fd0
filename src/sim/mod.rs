//! Deterministic simulation module
//!
//! All gameplay logic lives here. The simulation is a set of cooperative
//! tasks driven in lockstep ticks by the scheduler:
//! - Single logical thread, no locking: one task runs at a time
//! - Seeded RNG only
//! - Tasks communicate through the shared `World`, never directly
//! - No terminal or platform dependencies

pub mod obstacles;
pub mod physics;
pub mod scheduler;
pub mod tasks;
pub mod world;

pub use obstacles::{Obstacle, ObstacleId, Obstacles, PendingHits, has_collision, has_collision_sized};
pub use physics::update_speed;
pub use scheduler::{Scheduler, Task, TaskStatus, TickCx};
pub use world::{Ship, World};
