//! Framebuffer and style types for terminal rendering.
//!
//! [`FrameBuffer`] also implements the core [`Surface`] trait, so a frame can
//! be drawn off-screen (tests, snapshots) without touching a terminal.

use std::convert::Infallible;

use crate::core::render::BACKGROUND;
use crate::core::{Rect, Surface};
pub use crate::types::Rgb;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220), BACKGROUND)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Box-drawing outline. Degenerate rectangles draw nothing.
    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '─', style);
            self.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '│', style);
            self.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    /// Every row as a string, for assertions and debugging.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .filter_map(|x| self.get(x, y))
                    .map(|c| c.ch)
                    .collect()
            })
            .collect()
    }
}

impl Surface for FrameBuffer {
    type Error = Infallible;

    fn clear(&mut self, color: Rgb) {
        self.fill(Cell {
            ch: ' ',
            style: CellStyle::plain(color, color),
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.draw_border(rect.x, rect.y, rect.w, rect.h, CellStyle::plain(color, BACKGROUND));
    }

    /// Terminal cells are too coarse for circles; the marker is a solid
    /// block painted through the background colour so labels stay legible.
    fn fill_marker(&mut self, bounds: Rect, color: Rgb) {
        self.fill_rect(
            bounds.x,
            bounds.y,
            bounds.w,
            bounds.h,
            ' ',
            CellStyle::plain(color, color),
        );
    }

    /// Text keeps whatever background is already under it.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Rgb) {
        let mut cx = x;
        for ch in text.chars() {
            let Some(under) = self.get(cx, y) else {
                break;
            };
            let style = CellStyle {
                fg: color,
                bg: under.style.bg,
                bold: true,
                dim: false,
            };
            self.put_char(cx, y, ch, style);
            cx = cx.saturating_add(1);
        }
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
