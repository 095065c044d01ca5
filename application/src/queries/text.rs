//! Bounded-length text query

use super::{QueryContext, QuerySpec, prompt_with_preface};
use crate::use_cases::execute_query::QueryError;
use user_query_domain::{Conversion, TextLimit, Validation};

/// Ask the user for a line of text no longer than a limit.
///
/// The user sees:
///
/// ```text
/// {preface}
/// Enter a string of text no longer than 25 characters:
/// ```
#[derive(Debug, Clone)]
pub struct TextQuery {
    preface: String,
    limit: TextLimit,
}

impl TextQuery {
    pub fn new(preface: impl Into<String>, limit: TextLimit) -> Self {
        Self {
            preface: preface.into(),
            limit,
        }
    }

    pub fn limit(&self) -> TextLimit {
        self.limit
    }
}

impl QuerySpec for TextQuery {
    type Output = String;

    fn name(&self) -> &'static str {
        "text"
    }

    fn create_prompt_text(&self) -> String {
        let instruction = match self.limit.max_chars() {
            Some(max) => format!("Enter a string of text no longer than {} characters", max),
            None => "Enter a string of text".to_string(),
        };
        prompt_with_preface(&self.preface, &instruction)
    }

    fn process_raw_response(&self, raw: &str) -> Conversion<String> {
        Conversion::Converted(raw.to_string())
    }

    fn validate_processed_response(
        &self,
        processed: &String,
        _context: &QueryContext<'_>,
    ) -> Result<Validation, QueryError> {
        Ok(match self.limit.check(processed) {
            Ok(()) => Validation::Valid,
            Err(too_long) => Validation::invalid(format!(
                "'{}' is longer than {} characters. Please try again.",
                processed, too_long.max
            )),
        })
    }
}
