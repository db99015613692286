//! # Terminal Input Helper
//!
//! Utilities for prompting the user and re-prompting until the answer
//! satisfies the given validation filters.
//!
//! The core functionality relies on [`Sanitize`] for input validation, or on
//! any pure parse function passed to [`Terminal::ask_with`].
//!
//! A [`Terminal`] is generic over its input and output streams so a whole
//! session can be scripted in tests with an in-memory reader and writer.
//! [`Terminal::stdio`] builds the interactive one.
//!
//! ## Example
//! ```rust,no_run
//! use monster_catalogue::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let strength = terminal
//!     .ask("Enter strength (1-25): ", &[Sanitize::IsBetween(1, 25)])
//!     .unwrap();
//! println!("The input: {}", strength);
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::error::TerminalError;
use crate::utils::sanitize::Sanitize;

/// A prompt loop over a pair of streams.
///
/// Questions are written without a trailing newline, the answer is read up to
/// the end of the line and trimmed. Validation failures are written to the
/// same output and the question is asked again, with no retry limit.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal over the process' standard input and output.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> Result<(), TerminalError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prints the question and returns the trimmed answer, unvalidated.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so they
    /// reach validation like any other bad answer. Returns
    /// [`TerminalError::Closed`] once the input is exhausted.
    pub fn read_line(&mut self, question: &str) -> Result<String, TerminalError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = Vec::new();
        if self.input.read_until(b'\n', &mut answer)? == 0 {
            warn!(question, "input closed while waiting for an answer");
            return Err(TerminalError::Closed);
        }
        Ok(String::from_utf8_lossy(&answer).trim().to_string())
    }

    /// Prints a question and loops until the answer passes every filter.
    /// Internally calls [`Sanitize::execute`].
    pub fn ask(&mut self, question: &str, filters: &[Sanitize]) -> Result<String, TerminalError> {
        self.ask_with(question, |answer| Sanitize::execute(answer, filters))
    }

    /// Prints a question and loops until `parse` accepts the trimmed answer.
    ///
    /// The parse error's `Display` is shown to the user before asking again.
    pub fn ask_with<T, E, F>(&mut self, question: &str, parse: F) -> Result<T, TerminalError>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.read_line(question)?;
            match parse(&answer) {
                Ok(value) => break Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Asks a y/n question; only `y` (either case) counts as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool, TerminalError> {
        let answer = self.read_line(question)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Gives back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
