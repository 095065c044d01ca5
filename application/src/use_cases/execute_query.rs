//! Execute Query use case
//!
//! The retry loop shared by every query. A query supplies three primitive
//! steps; this loop decides when each runs:
//!
//! ```text
//! create_prompt_text()                 (once)
//!        ↓
//! ┌─> source.get_raw_response(prompt)
//! │      ↓
//! │   process_raw_response(raw) ── Rejected(msg) ──> issue_error_message(msg) ─┐
//! │      ↓ Converted(value)                                                    │
//! │   validate_processed_response(value) ── Invalid(msg) ──> issue_error_message(msg) ─┤
//! │      ↓ Valid                                                               │
//! │   return value                                                             │
//! └────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A value is only ever returned after it passed validation. Bad answers
//! never escape as errors; the only errors are a source that can no longer
//! supply text and, when configured, running out of attempts.

use crate::ports::response_source::{ResponseSource, ResponseSourceError};
use crate::queries::{QueryContext, QuerySpec};
use thiserror::Error;
use tracing::{debug, warn};
use user_query_domain::{Conversion, Validation};

/// Errors that can end a query without an answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Response source error: {0}")]
    Source(#[from] ResponseSourceError),

    #[error("No acceptable answer after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

impl QueryError {
    /// Check if the query ended because input was closed
    pub fn is_closed(&self) -> bool {
        matches!(self, QueryError::Source(ResponseSourceError::Closed))
    }
}

/// Runs queries against a response source until they produce a valid answer
///
/// By default there is no attempt limit: an interactive user is expected
/// to answer eventually or interrupt the process.
#[derive(Debug, Clone, Default)]
pub struct QueryExecutor {
    max_attempts: Option<usize>,
}

impl QueryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up after `attempts` raw responses (at least one).
    ///
    /// Nested queries run by the same executor get their own count.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    /// Ask `query` through `source` until an answer passes validation.
    pub fn execute<Q: QuerySpec>(
        &self,
        query: &Q,
        source: &dyn ResponseSource,
    ) -> Result<Q::Output, QueryError> {
        let prompt = query.create_prompt_text();
        let context = QueryContext::new(self, source);
        let mut attempts = 0usize;

        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                warn!(query = query.name(), attempts, "Giving up on query");
                return Err(QueryError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            let raw = source.get_raw_response(&prompt).inspect_err(|e| {
                warn!(query = query.name(), attempts, "Could not read response: {}", e);
            })?;
            debug!(query = query.name(), attempts, "Received raw response");

            let processed = match query.process_raw_response(&raw) {
                Conversion::Converted(value) => value,
                Conversion::Rejected(message) => {
                    debug!(query = query.name(), attempts, "Conversion rejected: {}", message);
                    source.issue_error_message(&message);
                    continue;
                }
            };

            match query.validate_processed_response(&processed, &context)? {
                Validation::Valid => {
                    debug!(query = query.name(), attempts, "Response accepted");
                    return Ok(processed);
                }
                Validation::Invalid(message) => {
                    debug!(query = query.name(), attempts, "Validation failed: {}", message);
                    source.issue_error_message(&message);
                }
            }
        }
    }
}
