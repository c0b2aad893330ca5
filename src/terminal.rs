//! Terminal queries for the command-line front end.

use crossterm::terminal;
use std::io::{self, IsTerminal, Stdout};

/// Width used when the terminal size cannot be queried (pipes, CI).
pub const FALLBACK_WIDTH: u16 = 80;

/// Get the current terminal width, falling back to [`FALLBACK_WIDTH`].
pub fn terminal_width() -> u16 {
    terminal::size()
        .map(|(w, _)| w)
        .ok()
        .filter(|w| *w > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Whether standard output is attached to a terminal.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
