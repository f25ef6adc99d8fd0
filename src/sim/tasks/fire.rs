//! Weapon bolt
//!
//! A short muzzle flash at the firing position, then point flight at a
//! fixed speed until the first obstacle hit or the field edge. The bolt
//! never removes an obstacle itself - it records the hit and finishes,
//! leaving resolution to the debris flight that owns the obstacle.

use crate::consts::{BOLT_SPEED, GUN_BOLT_SPEED};
use crate::sim::scheduler::{Task, TaskStatus, TickCx};

/// Muzzle-flash glyphs shown for one tick each before flight starts.
const FLASH: [char; 2] = ['*', 'O'];

pub struct Bolt {
    row: f32,
    column: f32,
    row_speed: f32,
    column_speed: f32,
    /// 0 and 1 are the muzzle-flash ticks; 2 onward is flight.
    phase: u8,
    drawn: Option<(f32, f32, char)>,
}

impl Bolt {
    pub fn new(row: f32, column: f32, row_speed: f32, column_speed: f32) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            phase: 0,
            drawn: None,
        }
    }

    /// A slow default bolt rising from the given position.
    pub fn rising(row: f32, column: f32) -> Self {
        Self::new(row, column, BOLT_SPEED, 0.0)
    }

    /// The ship's gun shot: fast and straight up.
    pub fn gun_shot(row: f32, column: f32) -> Self {
        Self::new(row, column, GUN_BOLT_SPEED, 0.0)
    }

    fn trail_symbol(&self) -> char {
        if self.column_speed != 0.0 { '-' } else { '|' }
    }

    fn stamp(&mut self, cx: &mut TickCx<'_>, symbol: char) {
        cx.canvas.draw(self.row, self.column, &symbol.to_string(), false);
        self.drawn = Some((self.row, self.column, symbol));
    }
}

impl Task for Bolt {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        if let Some((row, column, symbol)) = self.drawn.take() {
            cx.canvas.draw(row, column, &symbol.to_string(), true);
        }

        if (self.phase as usize) < FLASH.len() {
            let symbol = FLASH[self.phase as usize];
            self.phase += 1;
            self.stamp(cx, symbol);
            return TaskStatus::Running;
        }

        self.row += self.row_speed;
        self.column += self.column_speed;

        let (field_height, field_width) = cx.canvas.field_size();
        let out_of_field = self.row < 1.0
            || self.row >= (field_height - 1) as f32
            || self.column < 1.0
            || self.column >= (field_width - 1) as f32;
        if out_of_field {
            return TaskStatus::Finished;
        }

        if let Some(id) = cx.world.obstacles.first_hit(self.row, self.column) {
            cx.world.hits.mark(id);
            return TaskStatus::Finished;
        }

        let symbol = self.trail_symbol();
        self.stamp(cx, symbol);
        TaskStatus::Running
    }
}
