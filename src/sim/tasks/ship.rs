//! Ship animation and control
//!
//! Two tasks share the ship state: the animator alternates the sprite
//! frame on a slower cadence than ticks, and the controller turns input
//! into inertial movement, fires the gun, and watches for collisions.

use std::rc::Rc;

use crate::assets::SpriteSet;
use crate::canvas::frame_size;
use crate::consts::{BORDER, GUN_YEAR, SHIP_FRAME_TICS};
use crate::sim::obstacles::has_collision;
use crate::sim::physics::update_speed;
use crate::sim::scheduler::{Task, TaskStatus, TickCx};
use crate::sim::tasks::fire::Bolt;
use crate::sim::tasks::game_over::GameOverBanner;

/// Flips the displayed ship frame every [`SHIP_FRAME_TICS`] ticks.
pub struct ShipAnimator {
    tics: u32,
}

impl ShipAnimator {
    pub fn new() -> Self {
        Self { tics: 0 }
    }
}

impl Default for ShipAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for ShipAnimator {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        self.tics += 1;
        if self.tics >= SHIP_FRAME_TICS {
            self.tics = 0;
            cx.world.ship.frame = (cx.world.ship.frame + 1) % 2;
        }
        TaskStatus::Running
    }
}

/// Player control loop. Flying until an obstacle is struck, then spawns
/// the permanent game-over banner and terminates.
pub struct ShipController {
    sprites: Rc<SpriteSet>,
    /// Frame drawn last tick, erased before this tick's redraw.
    drawn: Option<(f32, f32, usize)>,
}

impl ShipController {
    pub fn new(sprites: Rc<SpriteSet>) -> Self {
        Self {
            sprites,
            drawn: None,
        }
    }
}

impl Task for ShipController {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        if let Some((row, column, frame)) = self.drawn.take() {
            cx.canvas.draw(row, column, &self.sprites.ship[frame], true);
        }

        let controls = cx.canvas.poll_input();
        let (row_speed, column_speed) = update_speed(
            cx.world.ship.row_speed,
            cx.world.ship.column_speed,
            controls.rows_direction,
            controls.columns_direction,
        );
        cx.world.ship.row_speed = row_speed;
        cx.world.ship.column_speed = column_speed;

        // Keep the whole sprite inside the reserved border.
        let frame = cx.world.ship.frame;
        let (frame_height, frame_width) = frame_size(&self.sprites.ship[frame]);
        let (field_height, field_width) = cx.canvas.field_size();
        let border = BORDER as f32;
        let max_row = ((field_height.saturating_sub(frame_height)) as f32 - border).max(border);
        let max_column = ((field_width.saturating_sub(frame_width)) as f32 - border).max(border);
        let row = (cx.world.ship.row + row_speed).clamp(border, max_row);
        let column = (cx.world.ship.column + column_speed).clamp(border, max_column);
        cx.world.ship.row = row;
        cx.world.ship.column = column;

        if controls.fire && cx.world.year >= GUN_YEAR {
            cx.canvas.beep();
            let muzzle_column = column + (frame_width / 2) as f32;
            cx.spawn(Bolt::gun_shot(row, muzzle_column));
        }

        cx.canvas.draw(row, column, &self.sprites.ship[frame], false);
        self.drawn = Some((row, column, frame));

        let struck = cx.world.obstacles.iter().any(|o| has_collision(o, row, column));
        if struck {
            log::info!("ship destroyed at ({row:.1}, {column:.1}), year {}", cx.world.year);
            cx.canvas.draw(row, column, &self.sprites.ship[frame], true);
            self.drawn = None;
            cx.spawn(GameOverBanner::new(Rc::clone(&self.sprites)));
            return TaskStatus::Finished;
        }
        TaskStatus::Running
    }
}
