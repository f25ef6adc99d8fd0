//! Game clock and caption
//!
//! The counter advances the simulated year on a fixed tic cadence,
//! independent of wall-clock time; the caption task renders the year
//! readout at a fixed position, with the milestone phrase when the table
//! has one and the bare year otherwise.

use crate::consts::TICS_PER_YEAR;
use crate::difficulty::caption;
use crate::sim::scheduler::{Task, TaskStatus, TickCx};

/// Advances the simulated year every [`TICS_PER_YEAR`] ticks, forever.
pub struct YearCounter {
    tics: u32,
}

impl YearCounter {
    pub fn new() -> Self {
        Self { tics: 0 }
    }
}

impl Default for YearCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for YearCounter {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        self.tics += 1;
        if self.tics >= TICS_PER_YEAR {
            self.tics = 0;
            cx.world.year += 1;
        }
        TaskStatus::Running
    }
}

/// Renders the year readout, erasing the previous text whenever it
/// changes. A table miss is a defined fallback, never a failure: the
/// nearest earlier milestone was the last thing on screen, and the bare
/// year replaces it.
pub struct YearCaption {
    row: u16,
    column: u16,
    drawn: Option<String>,
}

impl YearCaption {
    pub fn new(row: u16, column: u16) -> Self {
        Self {
            row,
            column,
            drawn: None,
        }
    }
}

impl Task for YearCaption {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        let year = cx.world.year;
        let text = match caption(year) {
            Some(phrase) => format!("{year} {phrase}"),
            None => year.to_string(),
        };
        if self.drawn.as_deref() != Some(text.as_str()) {
            if let Some(old) = self.drawn.take() {
                cx.canvas.draw(self.row as f32, self.column as f32, &old, true);
            }
            cx.canvas.draw(self.row as f32, self.column as f32, &text, false);
            self.drawn = Some(text);
        }
        TaskStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{MockCanvas, Op};
    use crate::consts::START_YEAR;
    use crate::sim::scheduler::Scheduler;
    use crate::sim::world::World;

    #[test]
    fn year_advances_every_fourteen_tics() {
        let mut scheduler = Scheduler::new();
        scheduler.register(YearCounter::new());
        let mut canvas = MockCanvas::new(20, 40);
        let mut world = World::new(1, 10.0, 10.0);

        for _ in 0..TICS_PER_YEAR - 1 {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        assert_eq!(world.year, START_YEAR);
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(world.year, START_YEAR + 1);

        for _ in 0..TICS_PER_YEAR {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        assert_eq!(world.year, START_YEAR + 2);
    }

    #[test]
    fn caption_redraws_only_when_the_text_changes() {
        let mut scheduler = Scheduler::new();
        scheduler.register(YearCaption::new(18, 2));
        let mut canvas = MockCanvas::new(20, 60);
        let mut world = World::new(1, 10.0, 10.0);

        for _ in 0..5 {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        let draws = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Draw { .. }))
            .count();
        assert_eq!(draws, 1);
    }

    #[test]
    fn milestone_caption_gives_way_to_the_bare_year() {
        let mut scheduler = Scheduler::new();
        scheduler.register(YearCaption::new(18, 2));
        let mut canvas = MockCanvas::new(20, 60);
        let mut world = World::new(1, 10.0, 10.0);

        world.year = 1961;
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(canvas.last_draw().unwrap().2, "1961 Gagarin flew!");

        // 1962 has no table entry: the milestone text is erased and the
        // bare year takes its place, without crashing on the miss.
        world.year = 1962;
        scheduler.run_tick(&mut canvas, &mut world);
        let erased = canvas.ops.iter().any(|op| {
            matches!(op, Op::Erase { text, .. } if text == "1961 Gagarin flew!")
        });
        assert!(erased);
        assert_eq!(canvas.last_draw().unwrap().2, "1962");
    }
}
