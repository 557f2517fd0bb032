//! Character-cell canvas with ANSI serialization.
//!
//! A flat grid of glyph + color cells that views rasterize into before a
//! single pass turns it into an ANSI string. Wide glyphs occupy their
//! display width; the cells they spill into are marked as continuations and
//! skipped when serializing.

use crossterm::style::{Color as AnsiColor, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;
use marketmap_core::Color;
use unicode_width::UnicodeWidthChar;

/// Marker glyph for the trailing cell of a wide character.
const CONTINUATION: char = '\0';

/// One canvas cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasCell {
    pub glyph: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: None,
            bg: None,
        }
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<CanvasCell>,
}

impl Canvas {
    /// Create a blank canvas of the given size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CanvasCell::default(); width * height],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y), if in bounds.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&CanvasCell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Set a single cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, glyph: char, fg: Option<Color>, bg: Option<Color>) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = CanvasCell { glyph, fg, bg };
        }
    }

    /// Fill a rectangle with a background color, clipped to the canvas.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, bg: Color) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let cell = &mut self.cells[row * self.width + col];
                cell.glyph = ' ';
                cell.bg = Some(bg);
            }
        }
    }

    /// Draw text starting at (x, y), truncated to `max_width` display
    /// columns and clipped to the canvas. Cells keep their existing
    /// background when `bg` is `None`.
    pub fn draw_text(
        &mut self,
        x: usize,
        y: usize,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        max_width: usize,
    ) {
        if y >= self.height {
            return;
        }
        let mut col = x;
        let budget = x + max_width;
        for glyph in text.chars() {
            let glyph_width = glyph.width().unwrap_or(0);
            if glyph_width == 0 {
                continue;
            }
            if col + glyph_width > budget || col + glyph_width > self.width {
                break;
            }
            let idx = y * self.width + col;
            let existing_bg = self.cells[idx].bg;
            self.cells[idx] = CanvasCell {
                glyph,
                fg,
                bg: bg.or(existing_bg),
            };
            for extra in 1..glyph_width {
                let cell = &mut self.cells[idx + extra];
                cell.glyph = CONTINUATION;
                cell.fg = fg;
                cell.bg = bg.or(cell.bg);
            }
            col += glyph_width;
        }
    }

    /// Serialize the canvas to a string, one line per row.
    ///
    /// With `color` set, runs of identical colors share one escape sequence;
    /// each row ends with a reset so trailing styles never bleed into the
    /// shell. Without it the output is plain text.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for y in 0..self.height {
            let mut current_fg: Option<Color> = None;
            let mut current_bg: Option<Color> = None;
            let mut styled = false;
            for x in 0..self.width {
                let cell = &self.cells[y * self.width + x];
                if cell.glyph == CONTINUATION {
                    continue;
                }
                if color && (cell.fg != current_fg || cell.bg != current_bg) {
                    push_ansi(&mut out, &ResetColor);
                    if let Some(fg) = cell.fg {
                        push_ansi(&mut out, &SetForegroundColor(to_ansi(fg)));
                    }
                    if let Some(bg) = cell.bg {
                        push_ansi(&mut out, &SetBackgroundColor(to_ansi(bg)));
                    }
                    current_fg = cell.fg;
                    current_bg = cell.bg;
                    styled = cell.fg.is_some() || cell.bg.is_some();
                }
                out.push(cell.glyph);
            }
            if color && styled {
                push_ansi(&mut out, &ResetColor);
            }
            out.push('\n');
        }
        out
    }
}

fn to_ansi(color: Color) -> AnsiColor {
    let (r, g, b) = color.to_rgb8();
    AnsiColor::Rgb { r, g, b }
}

fn push_ansi(out: &mut String, cmd: &impl Command) {
    // Writing into a String is infallible.
    let _ = cmd.write_ansi(out);
}
