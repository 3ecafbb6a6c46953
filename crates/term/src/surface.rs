//! TerminalSurface: the live drawing surface for the game loop.
//!
//! Draw calls land in an owned [`FrameBuffer`]; `present` hands it to the
//! diffing [`TerminalRenderer`].

use anyhow::Result;

use crate::core::{Rect, Surface};
use crate::fb::{FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::renderer::TerminalRenderer;

pub struct TerminalSurface {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen, mouse).
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Match the framebuffer to a new terminal size and force a full redraw.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width == self.fb.width() && viewport.height == self.fb.height() {
            return;
        }
        self.fb.resize(viewport.width, viewport.height);
        self.renderer.invalidate();
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.fb.width(), self.fb.height())
    }
}

impl Surface for TerminalSurface {
    type Error = anyhow::Error;

    fn clear(&mut self, color: Rgb) {
        self.fb.clear(color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.fb.draw_rect(rect, color);
    }

    fn fill_marker(&mut self, bounds: Rect, color: Rgb) {
        self.fb.fill_marker(bounds, color);
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Rgb) {
        self.fb.draw_text(x, y, text, color);
    }

    fn text_width(&self, text: &str) -> u16 {
        self.fb.text_width(text)
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.renderer.draw_swap(&mut self.fb)
    }
}
