//! Bounded numeric queries (integer and floating point)

use super::{QueryContext, QuerySpec, prompt_with_preface};
use crate::use_cases::execute_query::QueryError;
use std::fmt;
use std::num::IntErrorKind;
use user_query_domain::{Conversion, DomainError, NumericRange, Validation};

/// A number type that can be read from user text.
pub trait Number: Copy + PartialOrd + fmt::Display {
    /// Short name used in log output
    const NAME: &'static str;
    /// How the prompt asks for this type, e.g. "an integer number"
    const PROMPT_NOUN: &'static str;
    /// How a parse error names this type, e.g. "an integer"
    const ERROR_NOUN: &'static str;

    /// Parse user text, ignoring surrounding whitespace
    fn parse_text(text: &str) -> Result<Self, ParseFailure>;
}

/// Why user text did not become a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    NotANumber,
    TooLarge,
    TooSmall,
}

impl Number for i64 {
    const NAME: &'static str = "integer";
    const PROMPT_NOUN: &'static str = "an integer number";
    const ERROR_NOUN: &'static str = "an integer";

    fn parse_text(text: &str) -> Result<Self, ParseFailure> {
        text.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => ParseFailure::TooLarge,
            IntErrorKind::NegOverflow => ParseFailure::TooSmall,
            _ => ParseFailure::NotANumber,
        })
    }
}

impl Number for f64 {
    const NAME: &'static str = "float";
    const PROMPT_NOUN: &'static str = "a floating point number";
    const ERROR_NOUN: &'static str = "a floating point number";

    // NaN would slip past every range check, so it is not a number here.
    // Out-of-range text parses to an infinity and is left to the bounds.
    fn parse_text(text: &str) -> Result<Self, ParseFailure> {
        match text.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(ParseFailure::NotANumber),
        }
    }
}

/// Ask the user for a number within an optional range.
///
/// The user sees:
///
/// ```text
/// {preface}
/// Enter an integer number between 1 and 20:
/// ```
#[derive(Debug, Clone)]
pub struct NumberQuery<T> {
    preface: String,
    range: NumericRange<T>,
}

/// Query for an `i64` within an optional range
pub type IntegerQuery = NumberQuery<i64>;

/// Query for an `f64` within an optional range
pub type FloatQuery = NumberQuery<f64>;

impl<T: Number> NumberQuery<T> {
    /// Create a query with optional bounds. `None` leaves that end open.
    pub fn new(
        preface: impl Into<String>,
        minimum: Option<T>,
        maximum: Option<T>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            preface: preface.into(),
            range: NumericRange::new(minimum, maximum)?,
        })
    }
}

impl<T: Number> QuerySpec for NumberQuery<T> {
    type Output = T;

    fn name(&self) -> &'static str {
        T::NAME
    }

    fn create_prompt_text(&self) -> String {
        let instruction = match self.range.describe() {
            Some(clause) => format!("Enter {} {}", T::PROMPT_NOUN, clause),
            None => format!("Enter {}", T::PROMPT_NOUN),
        };
        prompt_with_preface(&self.preface, &instruction)
    }

    fn process_raw_response(&self, raw: &str) -> Conversion<T> {
        match T::parse_text(raw) {
            Ok(value) => Conversion::Converted(value),
            Err(ParseFailure::NotANumber) => Conversion::rejected(format!(
                "'{}' is not {}. Please try again.",
                raw,
                T::ERROR_NOUN
            )),
            Err(ParseFailure::TooLarge) => Conversion::rejected(format!(
                "'{}' is too large a number. Please try again.",
                raw
            )),
            Err(ParseFailure::TooSmall) => Conversion::rejected(format!(
                "'{}' is too small a number. Please try again.",
                raw
            )),
        }
    }

    fn validate_processed_response(
        &self,
        processed: &T,
        _context: &QueryContext<'_>,
    ) -> Result<Validation, QueryError> {
        Ok(match self.range.check(*processed) {
            Ok(()) => Validation::Valid,
            Err(violation) => Validation::invalid(format!("{}. Please try again.", violation)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::response_source::ScriptedResponseSource;
    use crate::use_cases::execute_query::QueryExecutor;

    #[test]
    fn test_integer_bad_parse_below_above_then_valid() {
        let query = IntegerQuery::new("How many decks?", Some(1), Some(20)).unwrap();
        let source = ScriptedResponseSource::new(["a", "0", "21", "10"]);

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        assert_eq!(answer, 10);
        assert_eq!(
            source.error_messages(),
            vec![
                "'a' is not an integer. Please try again.",
                "'0' is less than 1. Please try again.",
                "'21' is greater than 20. Please try again.",
            ]
        );
    }

    #[test]
    fn test_integer_prompt_text() {
        let bounded = IntegerQuery::new("How many?", Some(1), Some(20)).unwrap();
        assert_eq!(
            bounded.create_prompt_text(),
            "How many?\nEnter an integer number between 1 and 20:  "
        );

        let open = IntegerQuery::new("How many?", None, None).unwrap();
        assert_eq!(
            open.create_prompt_text(),
            "How many?\nEnter an integer number:  "
        );
    }

    #[test]
    fn test_integer_zero_bounds_are_enforced() {
        let query = IntegerQuery::new("", Some(0), Some(0)).unwrap();
        let source = ScriptedResponseSource::new(["-1", "1", "0"]);

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        assert_eq!(answer, 0);
        assert_eq!(
            source.error_messages(),
            vec![
                "'-1' is less than 0. Please try again.",
                "'1' is greater than 0. Please try again.",
            ]
        );
    }

    #[test]
    fn test_integer_tolerates_surrounding_whitespace() {
        let query = IntegerQuery::new("", None, None).unwrap();
        assert_eq!(query.process_raw_response(" 42 "), Conversion::Converted(42));
        assert_eq!(query.process_raw_response("+7"), Conversion::Converted(7));
        assert!(matches!(query.process_raw_response("4.2"), Conversion::Rejected(_)));
        assert!(matches!(query.process_raw_response(""), Conversion::Rejected(_)));
    }

    #[test]
    fn test_integer_overflow_is_reported_as_too_large() {
        let query = IntegerQuery::new("", None, None).unwrap();
        let source =
            ScriptedResponseSource::new(["99999999999999999999", "-99999999999999999999", "1"]);

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        assert_eq!(answer, 1);
        assert_eq!(
            source.error_messages(),
            vec![
                "'99999999999999999999' is too large a number. Please try again.",
                "'-99999999999999999999' is too small a number. Please try again.",
            ]
        );
    }

    #[test]
    fn test_float_unbounded_bad_then_valid() {
        let query = FloatQuery::new("Bet size?", None, None).unwrap();
        let source = ScriptedResponseSource::new(["a", "10.5"]);

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        assert_eq!(answer, 10.5);
        assert_eq!(
            source.error_messages(),
            vec!["'a' is not a floating point number. Please try again."]
        );
    }

    #[test]
    fn test_float_rejects_nan() {
        let query = FloatQuery::new("", None, None).unwrap();
        assert!(matches!(query.process_raw_response("NaN"), Conversion::Rejected(_)));
        assert!(matches!(query.process_raw_response("nan"), Conversion::Rejected(_)));
    }

    #[test]
    fn test_float_bounds() {
        let query = FloatQuery::new("", Some(0.0), Some(1.0)).unwrap();
        let source = ScriptedResponseSource::new(["-0.1", "1.5", "0.25"]);

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        assert_eq!(answer, 0.25);
        assert_eq!(
            source.error_messages(),
            vec![
                "'-0.1' is less than 0. Please try again.",
                "'1.5' is greater than 1. Please try again.",
            ]
        );
    }

    #[test]
    fn test_float_prompt_with_only_maximum() {
        let query = FloatQuery::new("Stake?", None, Some(99.5)).unwrap();
        assert_eq!(
            query.create_prompt_text(),
            "Stake?\nEnter a floating point number of at most 99.5:  "
        );
    }

    #[test]
    fn test_inverted_range_fails_construction() {
        let err = IntegerQuery::new("", Some(10), Some(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvertedRange { .. }));
    }
}
