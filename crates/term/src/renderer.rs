//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and the first after [`TerminalRenderer::invalidate`]) is a
//! full redraw; after that only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen. `None` means the screen is unknown.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.last = None;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call more than once; dropping the
    /// renderer calls it too.
    pub fn exit(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.entered, false) {
            return Ok(());
        }
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next draw repaints every cell.
    /// Call after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write `fb` to the terminal.
    ///
    /// On return `fb` holds the frame that was on screen before, sized to
    /// match. Two buffers rotate between caller and renderer, so diffing never
    /// clones a frame.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
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

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Clear the screen and encode every row of `fb` into `out`.
///
/// `out` only receives bytes; flushing them is up to the caller.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?
        .queue(cursor::MoveTo(0, 0))?;

    let mut writer = CellWriter::new(out);
    for y in 0..fb.height() {
        if y > 0 {
            writer.newline()?;
        }
        writer.write_cells(row(fb, y))?;
    }
    writer.finish()
}

/// Encode the cells of `next` that differ from `prev`, one cursor move per
/// run.
///
/// Writes nothing at all when the frames are identical.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut writer = CellWriter::new(out);
    for run in changed_runs(prev, next) {
        let start = run.x as usize;
        writer.move_to(run.x, run.y)?;
        writer.write_cells(&row(next, run.y)[start..start + run.len as usize])?;
    }
    writer.finish()
}

/// Queues cells, emitting style escapes only when the style changes.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn write_cells(&mut self, cells: &[Cell]) -> Result<()> {
        for &cell in cells {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    /// Restore default attributes if any cell was written.
    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            self.out
                .queue(ResetColor)?
                .queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?
        .queue(SetBackgroundColor(rgb_to_color(style.bg)))?
        .queue(SetAttribute(Attribute::Reset))?;
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

/// Cells of row `y`; `y` must be in range.
fn row(fb: &FrameBuffer, y: u16) -> &[Cell] {
    let width = fb.width() as usize;
    let start = y as usize * width;
    &fb.cells()[start..start + width]
}

/// A horizontal span of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Changed runs in row-major order. Frames of different sizes yield one
/// full-width run per row of `next`.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Run> + 'a {
    let resized = prev.width() != next.width() || prev.height() != next.height();
    let width = next.width();

    (0..next.height()).flat_map(move |y| {
        let mut x = 0;
        std::iter::from_fn(move || {
            if resized {
                if x > 0 || width == 0 {
                    return None;
                }
                x = width;
                return Some(Run { x: 0, y, len: width });
            }

            let differs = |col: u16| prev.get(col, y) != next.get(col, y);
            while x < width && !differs(x) {
                x += 1;
            }
            if x == width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some(Run {
                x: start,
                y,
                len: x - start,
            })
        })
    })
}
