//! The console collaborator that human players and the game loop talk to.

use crate::game::GameEvent;
use std::collections::VecDeque;
use std::io;

/// Line-oriented console.
///
/// The game loop reports [`GameEvent`]s through it and human players read
/// their moves from it. Reads block; `Ok(None)` means input is exhausted.
pub trait Terminal {
    /// Reads one line of input without its line terminator.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes a line of normal output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Writes a prompt that the next read answers.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Writes a diagnostic line.
    fn error_line(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line)
    }

    /// Reports a game event.
    fn show(&mut self, event: &GameEvent) -> io::Result<()> {
        self.write_line(&event.to_string())
    }
}

/// In-memory terminal fed from a fixed script of input lines.
///
/// Used by tests and non-interactive play; output is captured for
/// inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<String>,
    errors: Vec<String>,
    prompts: usize,
}

impl ScriptedTerminal {
    /// Creates a terminal that will answer reads with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines written with [`Terminal::write_line`] or [`Terminal::show`].
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Lines written with [`Terminal::error_line`].
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of prompts shown.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, _text: &str) -> io::Result<()> {
        self.prompts += 1;
        Ok(())
    }

    fn error_line(&mut self, line: &str) -> io::Result<()> {
        self.errors.push(line.to_string());
        Ok(())
    }
}
