use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// How a single animation glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// The leading edge of a column: bold, default color.
    Lead,
    /// The previously revealed glyph behind the lead: bold green.
    Trail,
}

/// Minimal drawing target for the animation engine.
///
/// Only three operations are needed: place a styled glyph, queue a screen
/// clear, and flush the frame. Keeping the engine behind this trait lets
/// tests drive whole animation cycles against a recording implementation
/// instead of a live terminal.
pub trait Surface {
    /// Place `ch` at `(x, y)` with `style`. Out-of-range coordinates are a
    /// silent no-op.
    fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> io::Result<()>;

    /// Queue a full-screen clear; it takes effect at the next flush.
    fn clear(&mut self) -> io::Result<()>;

    /// Push the queued frame to the display.
    fn flush(&mut self) -> io::Result<()>;
}

/// Crossterm-backed surface writing queued escape sequences to `out`.
#[derive(Debug)]
pub struct TermSurface<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self { out, width, height }
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> io::Result<()> {
        if x >= self.width || y >= self.height {
            return Ok(());
        }
        match style {
            CellStyle::Lead => queue!(
                self.out,
                MoveTo(x, y),
                SetAttribute(Attribute::Bold),
                Print(ch),
                SetAttribute(Attribute::Reset),
            ),
            CellStyle::Trail => queue!(
                self.out,
                MoveTo(x, y),
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Green),
                Print(ch),
                ResetColor,
                SetAttribute(Attribute::Reset),
            ),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_emits_bold_without_green() {
        let mut buf = Vec::new();
        {
            let mut surface = TermSurface::new(&mut buf, 10, 10);
            surface.put(1, 2, 'x', CellStyle::Lead).unwrap();
            surface.flush().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}[1m"), "bold attribute missing: {out:?}");
        assert!(!out.contains("\u{1b}[38;5;"), "lead must keep default color");
        assert!(out.contains('x'));
    }

    #[test]
    fn trail_emits_green_foreground() {
        let mut buf = Vec::new();
        {
            let mut surface = TermSurface::new(&mut buf, 10, 10);
            surface.put(0, 0, 'y', CellStyle::Trail).unwrap();
            surface.flush().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}[38;5;10m"), "green foreground missing: {out:?}");
        assert!(out.contains('y'));
    }

    #[test]
    fn out_of_range_put_writes_nothing() {
        let mut buf = Vec::new();
        {
            let mut surface = TermSurface::new(&mut buf, 4, 4);
            surface.put(4, 0, 'a', CellStyle::Lead).unwrap();
            surface.put(0, 4, 'b', CellStyle::Trail).unwrap();
            surface.flush().unwrap();
        }
        assert!(buf.is_empty());
    }
}
