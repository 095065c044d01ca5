//! Menu selection query

use super::{QueryContext, QuerySpec, prompt_with_preface};
use crate::use_cases::execute_query::QueryError;
use user_query_domain::{Conversion, MenuOptions, Validation};

/// Ask the user to pick one option from a menu.
///
/// The answer is the key the user typed, and it is always one of the
/// configured keys. Keys are matched exactly (case-sensitive, no trimming).
///
/// The user sees:
///
/// ```text
/// {preface}
/// Choose (h)Hit, (s)Stand:
/// ```
#[derive(Debug, Clone)]
pub struct MenuQuery {
    preface: String,
    options: MenuOptions,
}

impl MenuQuery {
    pub fn new(preface: impl Into<String>, options: MenuOptions) -> Self {
        Self {
            preface: preface.into(),
            options,
        }
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }
}

impl QuerySpec for MenuQuery {
    type Output = String;

    fn name(&self) -> &'static str {
        "menu"
    }

    fn create_prompt_text(&self) -> String {
        prompt_with_preface(
            &self.preface,
            &format!("Choose {}", self.options.render()),
        )
    }

    fn process_raw_response(&self, raw: &str) -> Conversion<String> {
        Conversion::Converted(raw.to_string())
    }

    fn validate_processed_response(
        &self,
        processed: &String,
        _context: &QueryContext<'_>,
    ) -> Result<Validation, QueryError> {
        if self.options.contains(processed) {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::invalid(format!(
                "'{}' is not a valid response. Please try again.",
                processed
            )))
        }
    }
}
