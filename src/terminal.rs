//! Crossterm terminal backend
//!
//! Implements the canvas seam over a raw-mode alternate screen. Draws are
//! queued and flushed once per tick by the host loop. Input is pumped
//! from the crossterm event queue into a per-tick `Controls` snapshot, so
//! `poll_input` never blocks.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Attribute},
    terminal,
};

use crate::canvas::{Brightness, Canvas, Controls};
use crate::consts::BORDER;

pub struct TerminalCanvas {
    out: Stdout,
    /// (height, width) in cells.
    size: (u16, u16),
    controls: Controls,
    quit: bool,
}

impl TerminalCanvas {
    /// Enter raw mode on the alternate screen and draw the border.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
        )?;
        let (columns, rows) = terminal::size()?;
        let mut canvas = Self {
            out,
            size: (rows, columns),
            controls: Controls::default(),
            quit: false,
        };
        canvas.draw_border()?;
        Ok(canvas)
    }

    fn draw_border(&mut self) -> io::Result<()> {
        let (height, width) = self.size;
        if height < 2 || width < 2 {
            return Ok(());
        }
        for column in 0..width {
            queue!(self.out, cursor::MoveTo(column, 0), style::Print('-'))?;
            queue!(self.out, cursor::MoveTo(column, height - 1), style::Print('-'))?;
        }
        for row in 0..height {
            queue!(self.out, cursor::MoveTo(0, row), style::Print('|'))?;
            queue!(self.out, cursor::MoveTo(width - 1, row), style::Print('|'))?;
        }
        for (row, column) in [(0, 0), (0, width - 1), (height - 1, 0), (height - 1, width - 1)] {
            queue!(self.out, cursor::MoveTo(column, row), style::Print('+'))?;
        }
        Ok(())
    }

    /// Drain pending terminal events into this tick's control snapshot.
    pub fn pump_events(&mut self) -> io::Result<()> {
        self.controls = Controls::default();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Up => self.controls.rows_direction = -1,
                    KeyCode::Down => self.controls.rows_direction = 1,
                    KeyCode::Left => self.controls.columns_direction = -1,
                    KeyCode::Right => self.controls.columns_direction = 1,
                    KeyCode::Char(' ') => self.controls.fire = true,
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    _ => {}
                },
                Event::Resize(columns, rows) => {
                    self.size = (rows, columns);
                    execute!(self.out, terminal::Clear(terminal::ClearType::All))?;
                    self.draw_border()?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push everything queued this tick to the screen.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// True for cells inside the reserved border.
    fn in_field(&self, row: i32, column: i32) -> bool {
        let (height, width) = self.size;
        row >= BORDER as i32
            && column >= BORDER as i32
            && row < height as i32 - BORDER as i32
            && column < width as i32 - BORDER as i32
    }

    fn stamp(&mut self, row: f32, column: f32, text: &str, erase: bool) -> io::Result<()> {
        let base_row = row.round() as i32;
        let base_column = column.round() as i32;
        for (line_index, line) in text.lines().enumerate() {
            let cell_row = base_row + line_index as i32;
            for (char_index, ch) in line.chars().enumerate() {
                // Spaces are transparent: they neither draw nor erase.
                if ch == ' ' {
                    continue;
                }
                let cell_column = base_column + char_index as i32;
                if !self.in_field(cell_row, cell_column) {
                    continue;
                }
                let printed = if erase { ' ' } else { ch };
                queue!(
                    self.out,
                    cursor::MoveTo(cell_column as u16, cell_row as u16),
                    style::Print(printed),
                )?;
            }
        }
        Ok(())
    }
}

impl Drop for TerminalCanvas {
    fn drop(&mut self) {
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

impl Canvas for TerminalCanvas {
    fn draw(&mut self, row: f32, column: f32, text: &str, erase: bool) {
        if let Err(err) = self.stamp(row, column, text, erase) {
            log::warn!("draw failed: {err}");
        }
    }

    fn draw_glyph(&mut self, row: u16, column: u16, glyph: char, brightness: Brightness) {
        if !self.in_field(row as i32, column as i32) {
            return;
        }
        let attribute = match brightness {
            Brightness::Dim => Attribute::Dim,
            Brightness::Normal => Attribute::Reset,
            Brightness::Bright => Attribute::Bold,
        };
        let result = queue!(
            self.out,
            cursor::MoveTo(column, row),
            style::SetAttribute(attribute),
            style::Print(glyph),
            style::SetAttribute(Attribute::Reset),
        );
        if let Err(err) = result {
            log::warn!("draw failed: {err}");
        }
    }

    fn poll_input(&mut self) -> Controls {
        self.controls
    }

    fn field_size(&self) -> (u16, u16) {
        self.size
    }

    fn beep(&mut self) {
        let _ = self.out.write_all(b"\x07");
    }
}
