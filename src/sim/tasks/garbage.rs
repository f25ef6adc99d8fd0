//! Debris spawning and flight
//!
//! The spawner consults the year table and launches debris flights at
//! random columns; each flight owns one obstacle in the registry, mirrors
//! its descent into it, and is the only consumer of that obstacle's
//! pending hit.

use std::rc::Rc;

use rand::Rng;

use crate::assets::SpriteSet;
use crate::canvas::frame_size;
use crate::consts::{BORDER, DEBRIS_SPEED};
use crate::difficulty::spawn_delay;
use crate::sim::obstacles::ObstacleId;
use crate::sim::scheduler::{Task, TaskStatus, TickCx};
use crate::sim::tasks::explosion::Explosion;
use crate::sim::world::World;

/// Runs indefinitely, launching debris at the pace the current simulated
/// year dictates. A year with no spawn interval just defers a tick.
pub struct DebrisSpawner {
    sprites: Rc<SpriteSet>,
    idle: u32,
}

impl DebrisSpawner {
    pub fn new(sprites: Rc<SpriteSet>) -> Self {
        Self { sprites, idle: 0 }
    }
}

impl Task for DebrisSpawner {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        if self.idle > 0 {
            self.idle -= 1;
            return TaskStatus::Running;
        }
        let Some(delay) = spawn_delay(cx.world.year) else {
            return TaskStatus::Running;
        };

        let index = cx.world.rng.random_range(0..self.sprites.debris.len());
        let (_, width) = frame_size(&self.sprites.debris[index]);
        let (_, field_width) = cx.canvas.field_size();
        if field_width < width + 2 * BORDER {
            // Field too narrow for this shape; try again next cycle.
            self.idle = delay.saturating_sub(1);
            return TaskStatus::Running;
        }
        let column = cx
            .world
            .rng
            .random_range(BORDER..=field_width - width - BORDER);
        log::debug!("debris {index} spawned at column {column}, year {}", cx.world.year);

        let flight = DebrisFlight::new(cx.world, column, Rc::clone(&self.sprites), index);
        cx.spawn(flight);
        // The spawn tick counts toward the interval.
        self.idle = delay.saturating_sub(1);
        TaskStatus::Running
    }
}

/// One piece of debris descending from the top edge. Terminates with an
/// explosion when its pending hit arrives, or silently past the bottom.
pub struct DebrisFlight {
    sprites: Rc<SpriteSet>,
    sprite_index: usize,
    obstacle: ObstacleId,
    row: f32,
    column: u16,
    drawn: Option<f32>,
}

impl DebrisFlight {
    /// Registers the obstacle at row 0 immediately; the flight itself
    /// first advances on the next tick.
    pub fn new(world: &mut World, column: u16, sprites: Rc<SpriteSet>, sprite_index: usize) -> Self {
        let (height, width) = frame_size(&sprites.debris[sprite_index]);
        let obstacle = world.obstacles.insert(0.0, column, height, width);
        Self {
            sprites,
            sprite_index,
            obstacle,
            row: 0.0,
            column,
            drawn: None,
        }
    }
}

impl Task for DebrisFlight {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        let text = &self.sprites.debris[self.sprite_index];
        if let Some(row) = self.drawn.take() {
            cx.canvas.draw(row, self.column as f32, text, true);
        }

        if cx.world.hits.take(self.obstacle) {
            cx.world.obstacles.remove(self.obstacle);
            let (height, width) = frame_size(text);
            cx.spawn(Explosion::new(
                self.row + height as f32 / 2.0,
                self.column as f32 + width as f32 / 2.0,
            ));
            return TaskStatus::Finished;
        }

        let (field_height, _) = cx.canvas.field_size();
        if self.row >= field_height as f32 {
            cx.world.obstacles.remove(self.obstacle);
            return TaskStatus::Finished;
        }

        cx.canvas.draw(self.row, self.column as f32, text, false);
        self.drawn = Some(self.row);

        self.row += DEBRIS_SPEED;
        if let Some(obstacle) = cx.world.obstacles.get_mut(self.obstacle) {
            obstacle.row = self.row;
        }
        TaskStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::MockCanvas;
    use crate::sim::scheduler::Scheduler;
    use crate::sim::tasks::fire::Bolt;

    fn sprites() -> Rc<SpriteSet> {
        Rc::new(crate::assets::builtin().unwrap())
    }

    #[test]
    fn descends_half_a_row_per_tick() {
        let mut canvas = MockCanvas::new(20, 40);
        let mut world = World::new(1, 10.0, 10.0);
        let mut scheduler = Scheduler::new();
        let flight = DebrisFlight::new(&mut world, 10, sprites(), 3);
        let id = flight.obstacle;
        scheduler.register(flight);

        scheduler.run_tick(&mut canvas, &mut world);
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(world.obstacles.get(id).unwrap().row, 1.0);
    }

    #[test]
    fn registers_obstacle_at_row_zero_on_creation() {
        let mut world = World::new(1, 10.0, 10.0);
        let flight = DebrisFlight::new(&mut world, 7, sprites(), 0);
        let obstacle = world.obstacles.get(flight.obstacle).unwrap();
        assert_eq!(obstacle.row, 0.0);
        assert_eq!(obstacle.column, 7);
        assert!(obstacle.height >= 1 && obstacle.width >= 1);
    }

    #[test]
    fn off_screen_flight_removes_obstacle_without_a_hit() {
        let mut canvas = MockCanvas::new(6, 40);
        let mut world = World::new(1, 2.0, 10.0);
        let mut scheduler = Scheduler::new();
        let flight = DebrisFlight::new(&mut world, 10, sprites(), 3);
        scheduler.register(flight);

        // 6 rows at 0.5 rows/tick: gone within 14 ticks.
        for _ in 0..14 {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        assert!(scheduler.is_empty());
        assert!(world.obstacles.is_empty());
        assert!(world.hits.is_empty());
    }

    #[test]
    fn bolt_hit_explodes_the_flight_on_the_next_tick() {
        let mut canvas = MockCanvas::new(30, 40);
        let mut world = World::new(1, 10.0, 10.0);
        let mut scheduler = Scheduler::new();
        let flight = DebrisFlight::new(&mut world, 9, sprites(), 3);
        let id = flight.obstacle;
        scheduler.register(flight);
        // Bolt two flash ticks from row 4, then 2 rows/tick upward: it
        // reaches the descending debris within a few ticks.
        scheduler.register(Bolt::gun_shot(4.0, 10.0));

        let mut hit_tick = None;
        for tick in 0..10 {
            scheduler.run_tick(&mut canvas, &mut world);
            if hit_tick.is_none() && !world.hits.is_empty() {
                hit_tick = Some(tick);
            }
            if let Some(struck) = hit_tick {
                if tick == struck + 1 {
                    // The owner consumed the hit and deregistered itself.
                    assert!(world.hits.is_empty());
                    assert!(world.obstacles.get(id).is_none());
                }
            }
        }
        let struck = hit_tick.expect("bolt must hit the debris");
        // Flight finished; only the explosion remains (or nothing, once done).
        assert!(world.obstacles.is_empty());
        assert!(struck < 9);
    }

    #[test]
    fn spawner_defers_while_orbit_is_clean() {
        let mut canvas = MockCanvas::new(20, 40);
        let mut world = World::new(1, 10.0, 10.0);
        let mut scheduler = Scheduler::new();
        scheduler.register(DebrisSpawner::new(sprites()));

        // 1957: no spawn interval defined.
        for _ in 0..30 {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        assert!(world.obstacles.is_empty());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn spawned_debris_always_fits_the_field() {
        let sprites = sprites();
        for seed in 0..40 {
            let mut canvas = MockCanvas::new(20, 30);
            let mut world = World::new(seed, 10.0, 10.0);
            world.year = 2020;
            let mut scheduler = Scheduler::new();
            scheduler.register(DebrisSpawner::new(Rc::clone(&sprites)));

            for _ in 0..30 {
                scheduler.run_tick(&mut canvas, &mut world);
            }
            for obstacle in world.obstacles.iter() {
                assert!(obstacle.column >= 1);
                assert!(obstacle.column + obstacle.width <= 30 - 1);
            }
        }
    }

    #[test]
    fn spawner_honors_the_year_interval() {
        let mut canvas = MockCanvas::new(200, 40);
        let mut world = World::new(3, 10.0, 10.0);
        world.year = 1961; // interval 20
        let mut scheduler = Scheduler::new();
        scheduler.register(DebrisSpawner::new(sprites()));

        for _ in 0..20 {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        // Exactly one spawn in the first interval window.
        assert_eq!(world.obstacles.len(), 1);
    }
}
