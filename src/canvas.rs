//! Rendering/input seam between the simulation and the host terminal.
//!
//! The simulation never touches the terminal directly: every task draws
//! through [`Canvas`], which the binary implements with crossterm and the
//! tests implement with a recording mock. Text blocks are stamped with
//! space characters transparent, and erased by re-stamping the same block
//! with `erase = true` - the render surface has no automatic clear, so
//! every task erases its previous frame before drawing the next.

/// Star brightness levels, matching terminal text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    Dim,
    Normal,
    Bright,
}

/// One tick's worth of player input.
///
/// Directions are -1, 0 or +1; they reflect whatever keys arrived since
/// the previous poll, so holding a key (via auto-repeat) reads as a
/// sustained direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}

/// The drawing and input surface the simulation runs against.
pub trait Canvas {
    /// Stamp a multi-line text block with its top-left corner at
    /// (`row`, `column`), rounding fractional positions to the nearest
    /// cell. Spaces in the block are transparent; cells outside the field
    /// are clipped. With `erase` set, the same block is blanked out
    /// instead - the caller passes the identical text and position it
    /// drew with.
    fn draw(&mut self, row: f32, column: f32, text: &str, erase: bool);

    /// Draw a single styled cell. Only the star field uses brightness.
    fn draw_glyph(&mut self, row: u16, column: u16, glyph: char, brightness: Brightness);

    /// Bounding size of a text block as (height, width).
    fn measure(&self, text: &str) -> (u16, u16) {
        frame_size(text)
    }

    /// Non-blocking read of the current directional/fire state.
    fn poll_input(&mut self) -> Controls;

    /// Current play-field dimensions as (height, width).
    fn field_size(&self) -> (u16, u16);

    /// Single audible cue (fired once per gun shot).
    fn beep(&mut self);
}

/// Measure a text block: line count by longest line, ignoring a trailing
/// newline so text read from an asset file measures the same as a literal.
pub fn frame_size(text: &str) -> (u16, u16) {
    let trimmed = text.strip_suffix('\n').unwrap_or(text);
    let height = trimmed.lines().count() as u16;
    let width = trimmed
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;
    (height, width)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_multiline() {
        let frame = "ab\ncdef\ng";
        assert_eq!(frame_size(frame), (3, 4));
    }

    #[test]
    fn frame_size_ignores_trailing_newline() {
        assert_eq!(frame_size("ab\ncd\n"), (2, 2));
        assert_eq!(frame_size("ab\ncd"), (2, 2));
    }

    #[test]
    fn frame_size_empty() {
        assert_eq!(frame_size(""), (0, 0));
    }
}
