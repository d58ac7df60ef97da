// Terminal render sink
// Paints the current color as a truecolor bar, redrawn in place

use log::{debug, warn};
use std::io::Write;

use lumen_engine::RenderSink;
use lumen_utils::{Color, Intensity, TransitionMode};

pub struct TerminalSink<W: Write + Send> {
    out: W,
    /// Bar width in columns
    width: usize,
    intensity: Intensity,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            intensity: Intensity::FULL,
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    /// One frame of output for `color`, with the cursor left at line start
    fn frame(&self, color: Color) -> String {
        let shown = color.dimmed(self.intensity);
        format!(
            "\r\x1b[48;2;{};{};{}m{}\x1b[0m {}",
            shown.r,
            shown.g,
            shown.b,
            " ".repeat(self.width),
            color.to_hex()
        )
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> RenderSink for TerminalSink<W> {
    fn render_color(&mut self, color: Color) {
        let frame = self.frame(color);
        if let Err(e) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!("Lumen: failed to paint terminal: {}", e);
        }
    }

    fn set_transition(&mut self, mode: TransitionMode) {
        // Terminal cells cannot ease, every change is instant
        debug!("Lumen: transition {}", mode);
    }
}
