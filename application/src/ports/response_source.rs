//! Response source port for exchanging text with the user.
//!
//! This module defines the port (interface) that every query uses to reach
//! the user. Queries decide *what* a valid answer is; a response source
//! decides *how* text physically arrives and how errors are shown.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ResponseSource`] - defined here in application layer
//! - **Adapter**: `ConsoleResponseSource` - implemented in presentation layer
//!
//! # Built-in Implementations
//!
//! - [`ScriptedResponseSource`] - Replays a fixed list of lines and records
//!   every prompt and error message it was given
//!
//! Response sources are always passed in by the caller. Nothing in the
//! query code constructs one.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Error type for response source operations.
///
/// These are failures to obtain text at all, not answers the user gave.
/// They end the query instead of triggering another attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseSourceError {
    /// No more input will ever arrive (end of file, script exhausted).
    #[error("Input closed")]
    Closed,
    /// Input/output error (e.g., terminal read failure).
    #[error("I/O error: {0}")]
    Io(String),
}

impl ResponseSourceError {
    /// Check if this error means the input stream has ended
    pub fn is_closed(&self) -> bool {
        matches!(self, ResponseSourceError::Closed)
    }
}

/// Port for exchanging text with the user.
///
/// # Implementations
///
/// - **Interactive (CLI)**: `ConsoleResponseSource` in presentation layer
/// - **Scripted**: [`ScriptedResponseSource`]
///
/// Callers must not run two queries against the same source at once.
pub trait ResponseSource: Send + Sync {
    /// Show `prompt` and block until the user supplies one line of text.
    ///
    /// The returned text is exactly what the user supplied, apart from the
    /// line terminator. No trimming or other normalization is done here.
    fn get_raw_response(&self, prompt: &str) -> Result<String, ResponseSourceError>;

    /// Tell the user their answer was not accepted. Best-effort.
    fn issue_error_message(&self, message: &str);
}

/// Replays a fixed sequence of lines as user input.
///
/// Every prompt shown and every error message issued is recorded so a
/// test can assert on the conversation afterwards. Once the script runs
/// out, [`ResponseSourceError::Closed`] is returned.
#[derive(Debug, Default)]
pub struct ScriptedResponseSource {
    lines: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    error_messages: Mutex<Vec<String>>,
}

impl ScriptedResponseSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
            error_messages: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far, one entry per line requested
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Error messages issued so far, in order
    pub fn error_messages(&self) -> Vec<String> {
        lock(&self.error_messages).clone()
    }

    /// Number of scripted lines not yet consumed
    pub fn remaining(&self) -> usize {
        lock(&self.lines).len()
    }
}

impl ResponseSource for ScriptedResponseSource {
    fn get_raw_response(&self, prompt: &str) -> Result<String, ResponseSourceError> {
        lock(&self.prompts).push(prompt.to_string());
        lock(&self.lines)
            .pop_front()
            .ok_or(ResponseSourceError::Closed)
    }

    fn issue_error_message(&self, message: &str) {
        lock(&self.error_messages).push(message.to_string());
    }
}

// A panic while holding one of these locks leaves plain data behind, so
// the poisoned value is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
