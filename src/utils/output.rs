//! Console output that survives a closed stdout

use std::{
    fmt,
    io::{self, Write},
};
use tracing::debug;

/// Write one line to `out` and flush it
pub fn write_line(out: &mut impl Write, line: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

/// Print one line to stdout, dropping it if stdout has gone away
pub fn print_line(line: impl fmt::Display) {
    if let Err(e) = write_line(&mut io::stdout().lock(), line) {
        debug!("Dropping console output: {}", e);
    }
}
