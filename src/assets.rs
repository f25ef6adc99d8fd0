//! Sprite text assets
//!
//! All art is plain multi-line text, embedded by the bootstrap and
//! validated once before the scheduler starts. A missing or malformed
//! sprite is a fatal configuration fault, never retried.

use thiserror::Error;

use crate::canvas::frame_size;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite `{0}` is empty")]
    EmptySprite(&'static str),
    #[error("ship frames differ in size: {0:?} vs {1:?}")]
    ShipFrameMismatch((u16, u16), (u16, u16)),
    #[error("no debris sprites configured")]
    NoDebris,
}

/// The validated sprite catalogue handed to the simulation as plain data.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    /// The two ship frames, alternated by the animator. Same size each.
    pub ship: [String; 2],
    /// Debris shapes the spawner picks from uniformly.
    pub debris: Vec<String>,
    /// Permanent banner shown after the ship is destroyed.
    pub game_over: String,
}

impl SpriteSet {
    pub fn new(
        ship: [String; 2],
        debris: Vec<String>,
        game_over: String,
    ) -> Result<Self, AssetError> {
        let first = frame_size(&ship[0]);
        let second = frame_size(&ship[1]);
        if first.0 == 0 || first.1 == 0 {
            return Err(AssetError::EmptySprite("ship"));
        }
        if first != second {
            return Err(AssetError::ShipFrameMismatch(first, second));
        }
        if debris.is_empty() {
            return Err(AssetError::NoDebris);
        }
        for sprite in &debris {
            let (height, width) = frame_size(sprite);
            if height == 0 || width == 0 {
                return Err(AssetError::EmptySprite("debris"));
            }
        }
        if frame_size(&game_over).0 == 0 {
            return Err(AssetError::EmptySprite("game_over"));
        }
        Ok(Self {
            ship,
            debris,
            game_over,
        })
    }
}

/// The built-in sprite catalogue compiled into the binary.
pub fn builtin() -> Result<SpriteSet, AssetError> {
    SpriteSet::new(
        [
            include_str!("../assets/rocket_frame_1.txt").to_owned(),
            include_str!("../assets/rocket_frame_2.txt").to_owned(),
        ],
        vec![
            include_str!("../assets/duck.txt").to_owned(),
            include_str!("../assets/hubble.txt").to_owned(),
            include_str!("../assets/lamp.txt").to_owned(),
            include_str!("../assets/trash_small.txt").to_owned(),
            include_str!("../assets/trash_large.txt").to_owned(),
            include_str!("../assets/trash_xl.txt").to_owned(),
        ],
        include_str!("../assets/game_over.txt").to_owned(),
    )
}
