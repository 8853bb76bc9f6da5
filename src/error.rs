use thiserror::Error;

/// Everything that can stop the program. Each kind is detected synchronously
/// at its point of occurrence and is terminal for the process; `main` prints
/// the message to stderr and exits with [`Error::exit_code`].
#[derive(Debug, Error)]
pub enum Error {
    /// The report contained no open ports.
    #[error("all ports are closed")]
    AllPortsClosed,

    /// The terminal cannot display the colors the animation needs.
    #[error("your terminal does not support colors")]
    UnsupportedTerminal,

    /// More records than terminal columns; every record needs its own column.
    #[error("terminal window is too narrow ({width} columns for {records} records)")]
    TerminalTooNarrow { records: usize, width: u16 },

    /// The input did not start with an Nmap report banner.
    #[error("Nmap header was not found")]
    HeaderNotFound,

    #[error("pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    /// The terminal reported a zero-sized window.
    #[error("terminal window has zero size")]
    ZeroSizedTerminal,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::AllPortsClosed => 1,
            Error::UnsupportedTerminal => 2,
            Error::TerminalTooNarrow { .. } => 3,
            Error::HeaderNotFound => 4,
            Error::Pattern(_) => 5,
            Error::ZeroSizedTerminal => 6,
            Error::Io(_) => 7,
        }
    }
}
