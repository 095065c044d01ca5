//! One-call entry points for asking the user a single question.
//!
//! Each `ask_for_*` function wires up a [`ConsoleResponseSource`], builds
//! the matching query and runs it. Callers that want a different source
//! (or to reuse one across questions) can use [`Asker`] directly.
//!
//! ```ignore
//! use user_query_presentation::ask::{ask_for_int, ask_for_menu_selection};
//!
//! let action = ask_for_menu_selection("Your move?", [("h", "Hit"), ("s", "Stand")])?;
//! let bet = ask_for_int("How much do you bet?", Some(1), Some(500))?;
//! ```

use crate::console::ConsoleResponseSource;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;
use user_query_application::{
    FloatQuery, IntegerQuery, MenuQuery, OpenPathQuery, QueryError, QueryExecutor, QuerySpec,
    ResponseSource, SavePathQuery, TextQuery,
};
use user_query_domain::{DomainError, MenuOptions, TextLimit};

/// Errors from the convenience entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AskError {
    /// The question itself was configured wrongly
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] DomainError),

    /// The question could not be answered
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl AskError {
    /// Check if asking stopped because input was closed
    pub fn is_closed(&self) -> bool {
        matches!(self, AskError::Query(e) if e.is_closed())
    }
}

/// Asks single questions through one response source.
pub struct Asker<'a> {
    source: &'a dyn ResponseSource,
    executor: QueryExecutor,
}

impl<'a> Asker<'a> {
    pub fn new(source: &'a dyn ResponseSource) -> Self {
        Self {
            source,
            executor: QueryExecutor::new(),
        }
    }

    pub fn with_executor(mut self, executor: QueryExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// Run an already-built query
    pub fn run<Q: QuerySpec>(&self, query: &Q) -> Result<Q::Output, AskError> {
        let answer = self.executor.execute(query, self.source)?;
        info!(query = query.name(), "Query answered");
        Ok(answer)
    }

    /// Returns the key of the option the user picked
    pub fn menu_selection<K, L, I>(&self, preface: &str, options: I) -> Result<String, AskError>
    where
        K: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = (K, L)>,
    {
        let query = MenuQuery::new(preface, MenuOptions::new(options)?);
        self.run(&query)
    }

    pub fn int(
        &self,
        preface: &str,
        minimum: Option<i64>,
        maximum: Option<i64>,
    ) -> Result<i64, AskError> {
        self.run(&IntegerQuery::new(preface, minimum, maximum)?)
    }

    pub fn float(
        &self,
        preface: &str,
        minimum: Option<f64>,
        maximum: Option<f64>,
    ) -> Result<f64, AskError> {
        self.run(&FloatQuery::new(preface, minimum, maximum)?)
    }

    /// `max_length` of `None` accepts text of any length
    pub fn text(&self, preface: &str, max_length: Option<usize>) -> Result<String, AskError> {
        self.run(&TextQuery::new(preface, TextLimit::new(max_length)))
    }

    pub fn path_save(&self, preface: &str) -> Result<PathBuf, AskError> {
        self.run(&SavePathQuery::new(preface))
    }

    pub fn path_open(&self, preface: &str) -> Result<PathBuf, AskError> {
        self.run(&OpenPathQuery::new(preface))
    }
}

/// Ask the user to pick from a menu on the console; returns the chosen key.
pub fn ask_for_menu_selection<K, L, I>(preface: &str, options: I) -> Result<String, AskError>
where
    K: Into<String>,
    L: Into<String>,
    I: IntoIterator<Item = (K, L)>,
{
    let source = ConsoleResponseSource::new();
    Asker::new(&source).menu_selection(preface, options)
}

/// Ask the user for an integer on the console. `None` leaves a bound open.
pub fn ask_for_int(
    preface: &str,
    minimum: Option<i64>,
    maximum: Option<i64>,
) -> Result<i64, AskError> {
    let source = ConsoleResponseSource::new();
    Asker::new(&source).int(preface, minimum, maximum)
}

/// Ask the user for a floating point number on the console.
pub fn ask_for_float(
    preface: &str,
    minimum: Option<f64>,
    maximum: Option<f64>,
) -> Result<f64, AskError> {
    let source = ConsoleResponseSource::new();
    Asker::new(&source).float(preface, minimum, maximum)
}

/// Ask the user for text on the console.
///
/// Pass `Some(DEFAULT_MAX_LENGTH)` for the usual 25-character limit.
pub fn ask_for_str(preface: &str, max_length: Option<usize>) -> Result<String, AskError> {
    let source = ConsoleResponseSource::new();
    Asker::new(&source).text(preface, max_length)
}

/// Ask the user where to save a file, confirming before overwriting.
pub fn ask_for_path_save(preface: &str) -> Result<PathBuf, AskError> {
    let source = ConsoleResponseSource::new();
    Asker::new(&source).path_save(preface)
}

/// Ask the user for a file to open. Existence is not checked.
pub fn ask_for_path_open(preface: &str) -> Result<PathBuf, AskError> {
    let source = ConsoleResponseSource::new();
    Asker::new(&source).path_open(preface)
}
