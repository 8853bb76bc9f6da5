use std::io::{self, Write};

use crossterm::{
    cursor, execute,
    style::available_color_count,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::Error;

/// RAII guard for exclusive terminal ownership.
///
/// Acquiring the session probes color support, then enters raw mode, the
/// alternate screen, and hides the cursor. Dropping it restores everything
/// in reverse order, so the terminal comes back intact on every exit path,
/// error paths included.
#[derive(Debug)]
pub struct TermSession {
    raw: bool,
    alternate: bool,
}

impl TermSession {
    /// Take over the terminal for the animation.
    ///
    /// The color probe runs before any terminal state changes, so an
    /// unsupported terminal is rejected with nothing to undo.
    pub fn acquire() -> Result<Self, Error> {
        if available_color_count() < 8 {
            return Err(Error::UnsupportedTerminal);
        }

        terminal::enable_raw_mode()?;
        let mut session = Self {
            raw: true,
            alternate: false,
        };

        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        session.alternate = true;
        Ok(session)
    }

    /// Current terminal dimensions as `(columns, rows)`.
    pub fn size(&self) -> Result<(u16, u16), Error> {
        Ok(terminal::size()?)
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.alternate {
            let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        }
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
        let _ = stdout.flush();
    }
}
