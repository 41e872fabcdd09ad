//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after [`TerminalRenderer::invalidate`] or a
//! size change) is a full redraw. Every other frame only emits the runs of
//! cells that changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    mouse: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            mouse: false,
        }
    }

    /// Also capture mouse clicks while the renderer owns the terminal.
    pub fn with_mouse_capture(mut self) -> Self {
        self.mouse = true;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.mouse {
            self.buf.queue(EnableMouseCapture)?;
        }
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.mouse {
            self.buf.queue(DisableMouseCapture)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Call this on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call `fb` holds the previous frame, so it can be reused without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();

        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
