//! Stardrift - a terminal space-debris arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cooperative scheduler, tasks, collisions)
//! - `canvas`: Rendering/input seam consumed by the simulation
//! - `difficulty`: Simulated-year scenario table (spawn pacing, captions)
//! - `assets`: Sprite text validation
//! - `config`: Runtime settings
//! - `terminal`: Crossterm backend implementing the canvas seam

pub mod assets;
pub mod canvas;
pub mod config;
pub mod difficulty;
pub mod sim;
pub mod terminal;

pub use assets::SpriteSet;
pub use canvas::{Brightness, Canvas, Controls, frame_size};
pub use config::Settings;

/// Game tuning constants
pub mod consts {
    /// Wall-clock delay between scheduler ticks (milliseconds)
    pub const TIC_TIMEOUT_MS: u64 = 100;

    /// Ship acceleration per tick while a direction key is held
    pub const SHIP_ACCELERATION: f32 = 0.5;
    /// Maximum ship speed magnitude, rows or columns per tick
    pub const SHIP_MAX_SPEED: f32 = 2.0;
    /// Multiplicative speed decay per tick with no direction held
    pub const SHIP_SPEED_DECAY: f32 = 0.5;
    /// Speeds below this snap to exactly zero
    pub const SHIP_SPEED_EPSILON: f32 = 0.01;
    /// Ticks each ship sprite frame stays on screen
    pub const SHIP_FRAME_TICS: u32 = 2;

    /// Default bolt speed in rows per tick (negative = up)
    pub const BOLT_SPEED: f32 = -0.3;
    /// Bolt speed when fired from the ship's gun
    pub const GUN_BOLT_SPEED: f32 = -2.0;

    /// Debris descent speed in rows per tick
    pub const DEBRIS_SPEED: f32 = 0.5;

    /// Ticks between simulated-year increments
    pub const TICS_PER_YEAR: u32 = 14;
    /// The game opens with the launch of Sputnik
    pub const START_YEAR: i32 = 1957;
    /// First year the plasma gun may fire
    pub const GUN_YEAR: i32 = 2020;

    /// Star blink phase durations in ticks: dim, normal, bright, normal
    pub const STAR_PHASE_TICS: [u32; 4] = [20, 3, 5, 3];
    /// Maximum random start offset so stars do not pulse in unison
    pub const STAR_MAX_OFFSET_TICS: u32 = 30;
    /// Glyphs a star may be drawn with
    pub const STAR_GLYPHS: [char; 4] = ['+', '*', '.', ':'];

    /// Reserved border width on every field edge, never drawn over
    pub const BORDER: u16 = 1;
}
