use std::convert::Infallible;
use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;

use nmatrix::error::Error;
use nmatrix::matrix::Matrix;
use nmatrix::report;
use nmatrix::surface::TermSurface;
use nmatrix::term::TermSession;

/// nmatrix — Nmap scan results as falling matrix-style terminal rain.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nmatrix",
    version,
    about = "Nmap scan results as falling matrix-style terminal rain. Pipe a report in: nmap <target> | nmatrix",
    long_about = None
)]
struct Cli {
    /// Maximum number of open ports to keep from the report.
    #[arg(short = 'm', long = "max", default_value_t = 100)]
    max: usize,
}

fn main() {
    let cli = Cli::parse();

    if io::stdin().is_terminal() {
        eprintln!("nmatrix: expects an Nmap report on stdin; it is not a standalone program.");
        eprintln!("usage: nmap <target> | nmatrix [-m <max>]");
        process::exit(2);
    }

    match run(cli) {
        Ok(never) => match never {},
        Err(err) => {
            // The terminal session guard has already been dropped here, so
            // the diagnostic lands on a restored screen.
            eprintln!("nmatrix: {err}");
            process::exit(err.exit_code());
        }
    }
}

/// Parse the whole report first, then take over the terminal and animate
/// until the process is killed.
fn run(cli: Cli) -> Result<Infallible, Error> {
    let stdin = io::stdin();
    let records = report::parse(stdin.lock(), cli.max)?;

    let session = TermSession::acquire()?;
    let (width, height) = session.size()?;

    let mut matrix = Matrix::new(&records, width, height)?;
    let mut surface = TermSurface::new(io::stdout(), width, height);
    matrix.run(&mut surface)
}
