//! Star field
//!
//! Purely cosmetic: each star is its own blink task cycling through a
//! 4-phase brightness pattern, offset at startup by a random delay so the
//! sky does not pulse in unison. Never collides, never terminates.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::canvas::Brightness;
use crate::consts::{BORDER, STAR_GLYPHS, STAR_MAX_OFFSET_TICS, STAR_PHASE_TICS};
use crate::sim::scheduler::{Task, TaskStatus, TickCx};

const PHASES: [Brightness; 4] = [
    Brightness::Dim,
    Brightness::Normal,
    Brightness::Bright,
    Brightness::Normal,
];

pub struct Star {
    row: u16,
    column: u16,
    glyph: char,
    delay: u32,
    phase: usize,
    left: u32,
}

impl Star {
    pub fn new(row: u16, column: u16, glyph: char, offset_tics: u32) -> Self {
        Self {
            row,
            column,
            glyph,
            delay: offset_tics,
            phase: 0,
            left: STAR_PHASE_TICS[0],
        }
    }
}

impl Task for Star {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
        if self.delay > 0 {
            self.delay -= 1;
            return TaskStatus::Running;
        }
        if self.left == 0 {
            self.phase = (self.phase + 1) % PHASES.len();
            self.left = STAR_PHASE_TICS[self.phase];
        }
        // Draw once on phase entry; the glyph stays until restyled.
        if self.left == STAR_PHASE_TICS[self.phase] {
            cx.canvas
                .draw_glyph(self.row, self.column, self.glyph, PHASES[self.phase]);
        }
        self.left -= 1;
        TaskStatus::Running
    }
}

/// Scatter `count` blink tasks over the field interior with random
/// glyphs and start offsets.
pub fn create_stars(rng: &mut Pcg32, field: (u16, u16), count: usize) -> Vec<Star> {
    let (height, width) = field;
    (0..count)
        .map(|_| {
            let row = rng.random_range(BORDER..height - BORDER);
            let column = rng.random_range(BORDER..width - BORDER);
            let glyph = STAR_GLYPHS[rng.random_range(0..STAR_GLYPHS.len())];
            let offset = rng.random_range(0..=STAR_MAX_OFFSET_TICS);
            Star::new(row, column, glyph, offset)
        })
        .collect()
}
