//! Explosion sequencer
//!
//! A short fixed-frame animation centered on a collision point: one frame
//! per tick, erased before the next, then done.

use crate::canvas::frame_size;
use crate::sim::scheduler::{Task, TaskStatus, TickCx};

pub const EXPLOSION_FRAMES: [&str; 4] = [
    "  .  \n ( ) \n  '  ",
    " ( ) \n( _ )\n ( ) ",
    "( ' )\n' _ '\n( . )",
    " '.' \n'   '\n .'. ",
];

pub struct Explosion {
    center_row: f32,
    center_column: f32,
    frame: usize,
    drawn: Option<usize>,
}

impl Explosion {
    pub fn new(center_row: f32, center_column: f32) -> Self {
        Self {
            center_row,
            center_column,
            frame: 0,
            drawn: None,
        }
    }

    fn corner(&self, frame: &str) -> (f32, f32) {
        let (height, width) = frame_size(frame);
        (
            self.center_row - height as f32 / 2.0,
            self.center_column - width as f32 / 2.0,
        )
    }
}

impl Task for Explosion {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        if let Some(index) = self.drawn.take() {
            let frame = EXPLOSION_FRAMES[index];
            let (row, column) = self.corner(frame);
            cx.canvas.draw(row, column, frame, true);
        }

        if self.frame >= EXPLOSION_FRAMES.len() {
            return TaskStatus::Finished;
        }
        let frame = EXPLOSION_FRAMES[self.frame];
        let (row, column) = self.corner(frame);
        cx.canvas.draw(row, column, frame, false);
        self.drawn = Some(self.frame);
        self.frame += 1;
        TaskStatus::Running
    }
}
