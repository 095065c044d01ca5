//! Console-backed response source.
//!
//! Implements [`ResponseSource`] on top of a line-oriented terminal:
//!
//! ```text
//! Which integer number do you want?
//! Enter an integer number of at most 1000:  abc
//!
//! 'abc' is not an integer. Please try again.
//! Which integer number do you want?
//! Enter an integer number of at most 1000:  42
//! ```
//!
//! The prompt is written without a trailing newline so the user types on
//! the same line. Only the line terminator is stripped from what they type.

use crate::config::ConsoleConfig;
use colored::Colorize;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;
use user_query_application::{ResponseSource, ResponseSourceError};

type Reader = Box<dyn BufRead + Send>;
type Writer = Box<dyn Write + Send>;

/// Interactive response source for the terminal.
///
/// # Example
///
/// ```ignore
/// use user_query_application::{IntegerQuery, QueryExecutor};
/// use user_query_presentation::ConsoleResponseSource;
///
/// let source = ConsoleResponseSource::new();
/// let query = IntegerQuery::new("How many decks?", Some(1), Some(8))?;
/// let decks = QueryExecutor::new().execute(&query, &source)?;
/// ```
pub struct ConsoleResponseSource {
    reader: Mutex<Reader>,
    writer: Mutex<Writer>,
    config: ConsoleConfig,
}

impl ConsoleResponseSource {
    /// Read from stdin, write to stdout
    pub fn new() -> Self {
        Self::from_io(BufReader::new(io::stdin()), io::stdout())
    }

    /// Use any line reader and writer in place of the terminal
    pub fn from_io<R, W>(reader: R, writer: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            reader: Mutex::new(Box::new(reader)),
            writer: Mutex::new(Box::new(writer)),
            config: ConsoleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Write the prompt and flush it so it shows before we block on input
    fn show_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut writer = lock(&self.writer);
        write!(writer, "{}", prompt)?;
        writer.flush()
    }

    /// Bytes that are not UTF-8 are replaced, so the query rejects the
    /// answer and asks again instead of failing.
    fn read_line(&self) -> Result<String, ResponseSourceError> {
        let mut buf = Vec::new();
        let read = lock(&self.reader)
            .read_until(b'\n', &mut buf)
            .map_err(|e| ResponseSourceError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(ResponseSourceError::Closed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for ConsoleResponseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSource for ConsoleResponseSource {
    fn get_raw_response(&self, prompt: &str) -> Result<String, ResponseSourceError> {
        self.show_prompt(prompt)
            .map_err(|e| ResponseSourceError::Io(format!("Failed to write prompt: {}", e)))?;
        self.read_line()
    }

    fn issue_error_message(&self, message: &str) {
        let mut writer = lock(&self.writer);
        let result = if self.config.color {
            writeln!(writer, "\n{}", message.red())
        } else {
            writeln!(writer, "\n{}", message)
        };
        if let Err(e) = result.and_then(|_| writer.flush()) {
            warn!("Failed to show error message: {}", e);
        }
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
