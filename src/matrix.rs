//! The falling-text animation engine.
//!
//! Every terminal column is assigned one open-port record (cyclically when
//! columns outnumber records) and reveals it character by character from a
//! random vertical offset, after a small random start delay. When every
//! column has finished revealing its record the screen is cleared, the
//! offsets are re-rolled, and the cycle starts over. The loop runs until the
//! process is killed.

use std::convert::Infallible;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::Error;
use crate::surface::{CellStyle, Surface};
use crate::types::RecordSet;

/// Fixed render cadence.
const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Start delays are drawn from `[0, START_DELAY_SPAN)` frames.
const START_DELAY_SPAN: u32 = 5;

#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Per-column animation state, re-rolled at every cycle restart.
#[derive(Debug, Clone, Copy)]
struct Column {
    /// Index of the assigned record in the set.
    record: usize,
    /// Row at which the record starts revealing.
    padding: u32,
    /// Frames to wait before this column starts.
    delay: u32,
}

/// Owns the column states, the frame cursor, and the PRNG.
#[derive(Debug)]
pub struct Matrix<'a> {
    records: &'a RecordSet,
    width: u16,
    height: u16,
    columns: Vec<Column>,
    frame: u32,
    rng: u32,
}

impl<'a> Matrix<'a> {
    /// Build the animation for a parsed record set, seeding the PRNG from
    /// the clock.
    pub fn new(records: &'a RecordSet, width: u16, height: u16) -> Result<Self, Error> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
            .unwrap_or(0x9E37_79B9);
        Self::with_seed(records, width, height, seed)
    }

    /// Deterministic variant for tests: the same seed yields the same
    /// column layout and frame sequence.
    pub fn with_seed(
        records: &'a RecordSet,
        width: u16,
        height: u16,
        seed: u32,
    ) -> Result<Self, Error> {
        if records.is_empty() {
            return Err(Error::AllPortsClosed);
        }
        if width == 0 || height == 0 {
            return Err(Error::ZeroSizedTerminal);
        }
        if records.len() > width as usize {
            return Err(Error::TerminalTooNarrow {
                records: records.len(),
                width,
            });
        }

        let mut matrix = Self {
            records,
            width,
            height,
            columns: Vec::with_capacity(width as usize),
            frame: 0,
            // Zero state would lock xorshift32 at zero forever.
            rng: seed | 1,
        };
        matrix.roll_columns();
        Ok(matrix)
    }

    /// Assign a record to every column and roll fresh offsets.
    fn roll_columns(&mut self) {
        self.columns.clear();
        for i in 0..self.width as usize {
            let record = i % self.records.len();
            let len = self.records.get(record).len() as u32;
            // Keep the whole record on screen when it fits; a record as tall
            // as the terminal starts at the top row.
            let span = u32::from(self.height).saturating_sub(len).max(1);
            let padding = xorshift32(&mut self.rng) % span;
            let delay = xorshift32(&mut self.rng) % START_DELAY_SPAN;
            self.columns.push(Column {
                record,
                padding,
                delay,
            });
        }
    }

    /// Render one frame.
    ///
    /// Draws the lead glyph of every active column in bold and re-draws the
    /// previous glyph as the bold-green trail, then flushes. Returns
    /// `Ok(true)` when every column finished the cycle, in which case the
    /// screen clear is queued, the frame cursor resets, and all offsets are
    /// re-rolled for the next cycle.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<bool, Error> {
        let frame = i64::from(self.frame);
        let mut completed = 0usize;

        for (x, col) in self.columns.iter().enumerate() {
            let record = self.records.get(col.record);
            let len = record.len() as i64;
            let offset = frame - i64::from(col.delay + col.padding);
            let row = frame - i64::from(col.delay);

            if offset >= 0 && offset < len {
                surface.put(
                    x as u16,
                    row as u16,
                    record.glyph(offset as usize),
                    CellStyle::Lead,
                )?;
            } else if offset > len {
                completed += 1;
            }

            if offset >= 1 && offset <= len {
                surface.put(
                    x as u16,
                    (row - 1) as u16,
                    record.glyph((offset - 1) as usize),
                    CellStyle::Trail,
                )?;
            }
        }

        surface.flush()?;

        if completed == self.columns.len() {
            surface.clear()?;
            self.frame = 0;
            self.roll_columns();
            return Ok(true);
        }

        self.frame += 1;
        Ok(false)
    }

    /// Run the animation forever at the fixed cadence. Only an I/O failure
    /// on the surface brings this back; the steady state is an infinite
    /// loop ended by an external signal.
    pub fn run<S: Surface>(&mut self, surface: &mut S) -> Result<Infallible, Error> {
        loop {
            self.tick(surface)?;
            thread::sleep(FRAME_DELAY);
        }
    }
}
