//! Query specifications: one per kind of answer the user can give.
//!
//! A query specification is a command object. It knows how to word the
//! question, how to turn raw text into a typed value, and whether that
//! value is acceptable. The retry loop that strings those steps together
//! lives once, in [`QueryExecutor`](crate::use_cases::execute_query::QueryExecutor).
//!
//! | Query | Output | Conversion | Validation |
//! |-------|--------|------------|------------|
//! | [`MenuQuery`] | `String` | never fails | key is on the menu |
//! | [`IntegerQuery`] | `i64` | integer parse | within range |
//! | [`FloatQuery`] | `f64` | float parse | within range |
//! | [`TextQuery`] | `String` | never fails | not too long |
//! | [`SavePathQuery`] | `PathBuf` | path syntax | overwrite confirmed |
//! | [`OpenPathQuery`] | `PathBuf` | path syntax | always accepted |

pub mod menu;
pub mod number;
pub mod path;
pub mod text;

pub use menu::MenuQuery;
pub use number::{FloatQuery, IntegerQuery, Number, NumberQuery, ParseFailure};
pub use path::{OpenPathQuery, SavePathQuery};
pub use text::TextQuery;

use crate::ports::response_source::ResponseSource;
use crate::use_cases::execute_query::{QueryError, QueryExecutor};
use user_query_domain::{Conversion, Validation};

/// The three primitive steps every query supplies to the executor.
pub trait QuerySpec {
    /// Typed value handed back to the caller
    type Output;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Text shown each time the user is asked. Built once per execution.
    fn create_prompt_text(&self) -> String;

    /// Turn raw text into the output type, or say why it cannot be.
    fn process_raw_response(&self, raw: &str) -> Conversion<Self::Output>;

    /// Check a converted value against this query's policy.
    ///
    /// Most queries decide on their own. `context` lets a query ask the
    /// user a follow-up question through the same source and executor;
    /// an error from that follow-up ends the whole query.
    fn validate_processed_response(
        &self,
        processed: &Self::Output,
        context: &QueryContext<'_>,
    ) -> Result<Validation, QueryError>;
}

/// What a query may use while validating: the executor running it and
/// the source it is reading from.
pub struct QueryContext<'a> {
    executor: &'a QueryExecutor,
    source: &'a dyn ResponseSource,
}

impl<'a> QueryContext<'a> {
    pub(crate) fn new(executor: &'a QueryExecutor, source: &'a dyn ResponseSource) -> Self {
        Self { executor, source }
    }

    /// Run a nested query to completion before returning.
    pub fn ask<Q: QuerySpec>(&self, query: &Q) -> Result<Q::Output, QueryError> {
        self.executor.execute(query, self.source)
    }
}

/// Join a caller-supplied preface and the query's own instruction.
pub(crate) fn prompt_with_preface(preface: &str, instruction: &str) -> String {
    if preface.is_empty() {
        format!("{}:  ", instruction)
    } else {
        format!("{}\n{}:  ", preface, instruction)
    }
}
