//! Game-over banner
//!
//! Registered by the ship controller when it is destroyed; redraws the
//! banner at the field center every tick, forever. Ship destruction is
//! normal terminal game state, not an error.

use std::rc::Rc;

use crate::assets::SpriteSet;
use crate::canvas::frame_size;
use crate::sim::scheduler::{Task, TaskStatus, TickCx};

pub struct GameOverBanner {
    sprites: Rc<SpriteSet>,
}

impl GameOverBanner {
    pub fn new(sprites: Rc<SpriteSet>) -> Self {
        Self { sprites }
    }
}

impl Task for GameOverBanner {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        let text = &self.sprites.game_over;
        let (height, width) = frame_size(text);
        let (field_height, field_width) = cx.canvas.field_size();
        let row = (field_height.saturating_sub(height) / 2) as f32;
        let column = (field_width.saturating_sub(width) / 2) as f32;
        cx.canvas.draw(row, column, text, false);
        TaskStatus::Running
    }
}
