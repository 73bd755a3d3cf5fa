//! Console terminal over any reader and writers.

use board_games_core::{GameEvent, Terminal};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};
use tracing::trace;

/// Terminal backed by a line reader, an output writer and an error writer.
#[derive(Debug)]
pub struct ConsoleTerminal<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl ConsoleTerminal<StdinLock<'static>, Stdout, Stderr> {
    /// Terminal over the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> ConsoleTerminal<R, W, E> {
    /// Creates a terminal over the given streams.
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Releases the streams.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }
}

impl<R: BufRead, W: Write, E: Write> Terminal for ConsoleTerminal<R, W, E> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn error_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.errors, "{line}")
    }

    /// Boards get a blank line on each side.
    fn show(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::Board(board) => writeln!(self.output, "\n{board}\n"),
            other => self.write_line(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_without_terminators() {
        let mut term = ConsoleTerminal::new(Cursor::new("1\r\n@Column(3)\n"), Vec::new(), Vec::new());
        assert_eq!(term.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(term.read_line().unwrap().as_deref(), Some("@Column(3)"));
        assert_eq!(term.read_line().unwrap(), None);
    }

    #[test]
    fn test_streams_are_separate() {
        let mut term = ConsoleTerminal::new(Cursor::new(""), Vec::new(), Vec::new());
        term.prompt("=> ").unwrap();
        term.write_line("hello").unwrap();
        term.error_line("bad move").unwrap();
        term.show(&GameEvent::Drawn).unwrap();

        let (_, out, err) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "=> hello\nNobody won.\n");
        assert_eq!(String::from_utf8(err).unwrap(), "bad move\n");
    }

    #[test]
    fn test_board_is_padded() {
        let mut term = ConsoleTerminal::new(Cursor::new(""), Vec::new(), Vec::new());
        term.show(&GameEvent::Board("|X|".to_string())).unwrap();
        let (_, out, _) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "\n|X|\n\n");
    }
}
