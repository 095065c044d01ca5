//! Filesystem path queries for saving and opening files.
//!
//! Both queries read the path verbatim: no canonicalization and no
//! extension handling. They differ only in validation. Saving asks before
//! reusing an existing path; opening never checks the filesystem.

use super::{MenuQuery, QueryContext, QuerySpec, prompt_with_preface};
use crate::use_cases::execute_query::QueryError;
use std::path::PathBuf;
use tracing::debug;
use user_query_domain::{Conversion, MenuOptions, Validation, parse_path};

const PATH_INSTRUCTION: &str = "Enter a valid file system path";

fn convert_path(raw: &str) -> Conversion<PathBuf> {
    match parse_path(raw) {
        Ok(path) => Conversion::Converted(path),
        Err(_) => Conversion::rejected(format!(
            "'{}' is not a valid file path. Please try again.",
            raw
        )),
    }
}

/// Ask the user where to save a file.
///
/// When the path already exists, a nested `y`/`n` menu asks whether to
/// overwrite it. Declining sends the user back to enter another path.
#[derive(Debug, Clone)]
pub struct SavePathQuery {
    preface: String,
}

impl SavePathQuery {
    pub fn new(preface: impl Into<String>) -> Self {
        Self {
            preface: preface.into(),
        }
    }
}

impl QuerySpec for SavePathQuery {
    type Output = PathBuf;

    fn name(&self) -> &'static str {
        "save-path"
    }

    fn create_prompt_text(&self) -> String {
        prompt_with_preface(&self.preface, PATH_INSTRUCTION)
    }

    fn process_raw_response(&self, raw: &str) -> Conversion<PathBuf> {
        convert_path(raw)
    }

    fn validate_processed_response(
        &self,
        processed: &PathBuf,
        context: &QueryContext<'_>,
    ) -> Result<Validation, QueryError> {
        if !processed.exists() {
            return Ok(Validation::Valid);
        }

        debug!(path = %processed.display(), "Path exists, confirming overwrite");
        let confirm = MenuQuery::new(
            format!(
                "'{}' is an existing file. Do you want to overwrite it?",
                processed.display()
            ),
            MenuOptions::yes_no(),
        );

        match context.ask(&confirm)?.as_str() {
            "y" => Ok(Validation::Valid),
            _ => Ok(Validation::invalid(
                "Please enter a path to a new file or file that you wish to overwrite.",
            )),
        }
    }
}

/// Ask the user for a file to open.
///
/// The path is not checked for existence; the caller finds out when it
/// tries to open it.
#[derive(Debug, Clone)]
pub struct OpenPathQuery {
    preface: String,
}

impl OpenPathQuery {
    pub fn new(preface: impl Into<String>) -> Self {
        Self {
            preface: preface.into(),
        }
    }
}

impl QuerySpec for OpenPathQuery {
    type Output = PathBuf;

    fn name(&self) -> &'static str {
        "open-path"
    }

    fn create_prompt_text(&self) -> String {
        prompt_with_preface(&self.preface, PATH_INSTRUCTION)
    }

    fn process_raw_response(&self, raw: &str) -> Conversion<PathBuf> {
        convert_path(raw)
    }

    fn validate_processed_response(
        &self,
        _processed: &PathBuf,
        _context: &QueryContext<'_>,
    ) -> Result<Validation, QueryError> {
        Ok(Validation::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::response_source::{ResponseSourceError, ScriptedResponseSource};
    use crate::use_cases::execute_query::QueryExecutor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_existing_declined_then_accepted() {
        let file = NamedTempFile::new().unwrap();
        let existing = file.path().to_string_lossy().to_string();
        let query = SavePathQuery::new("Which file do you wish to save?");
        let source = ScriptedResponseSource::new([
            existing.as_str(),
            "n",
            existing.as_str(),
            "y",
        ]);

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        assert_eq!(answer.to_string_lossy(), existing);
        assert_eq!(
            source.error_messages(),
            vec!["Please enter a path to a new file or file that you wish to overwrite."]
        );

        let prompts = source.prompts();
        assert_eq!(prompts.len(), 4);
        assert_eq!(
            prompts[1],
            format!(
                "'{}' is an existing file. Do you want to overwrite it?\nChoose (y)Yes, (n)No:  ",
                existing
            )
        );
        assert_eq!(prompts[0], prompts[2]);
    }

    #[test]
    fn test_save_new_path_needs_no_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("new-save.txt");
        let fresh = fresh.to_string_lossy().to_string();
        let source = ScriptedResponseSource::new([fresh.as_str()]);

        let answer = QueryExecutor::new()
            .execute(&SavePathQuery::new(""), &source)
            .unwrap();

        assert_eq!(answer.to_string_lossy(), fresh);
        assert_eq!(source.prompts().len(), 1);
        assert!(source.error_messages().is_empty());
    }

    #[test]
    fn test_save_nested_menu_retries_its_own_bad_key() {
        let file = NamedTempFile::new().unwrap();
        let existing = file.path().to_string_lossy().to_string();
        let source = ScriptedResponseSource::new([existing.as_str(), "maybe", "y"]);

        let answer = QueryExecutor::new()
            .execute(&SavePathQuery::new(""), &source)
            .unwrap();

        assert_eq!(answer.to_string_lossy(), existing);
        assert_eq!(
            source.error_messages(),
            vec!["'maybe' is not a valid response. Please try again."]
        );
    }

    #[test]
    fn test_save_closed_input_during_confirmation_ends_query() {
        let file = NamedTempFile::new().unwrap();
        let existing = file.path().to_string_lossy().to_string();
        let source = ScriptedResponseSource::new([existing.as_str()]);

        let err = QueryExecutor::new()
            .execute(&SavePathQuery::new(""), &source)
            .unwrap_err();

        assert_eq!(err, QueryError::Source(ResponseSourceError::Closed));
    }

    #[test]
    fn test_open_nonexistent_path_returned_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        let missing = missing.to_string_lossy().to_string();
        let source = ScriptedResponseSource::new([missing.as_str()]);

        let answer = QueryExecutor::new()
            .execute(&OpenPathQuery::new("Which file would you like to open?"), &source)
            .unwrap();

        assert_eq!(answer.to_string_lossy(), missing);
        assert!(!answer.exists());
        assert!(source.error_messages().is_empty());
    }

    #[test]
    fn test_open_existing_path_not_confirmed() {
        let file = NamedTempFile::new().unwrap();
        let existing = file.path().to_string_lossy().to_string();
        let source = ScriptedResponseSource::new([existing.as_str()]);

        let answer = QueryExecutor::new()
            .execute(&OpenPathQuery::new(""), &source)
            .unwrap();

        assert_eq!(answer.to_string_lossy(), existing);
        assert_eq!(source.prompts().len(), 1);
    }

    #[test]
    fn test_malformed_path_is_a_conversion_error() {
        let source = ScriptedResponseSource::new(["", "plain.txt"]);

        let answer = QueryExecutor::new()
            .execute(&OpenPathQuery::new(""), &source)
            .unwrap();

        assert_eq!(answer, PathBuf::from("plain.txt"));
        assert_eq!(
            source.error_messages(),
            vec!["'' is not a valid file path. Please try again."]
        );
    }

    #[test]
    fn test_path_prompt_text() {
        assert_eq!(
            SavePathQuery::new("Save where?").create_prompt_text(),
            "Save where?\nEnter a valid file system path:  "
        );
        assert_eq!(
            OpenPathQuery::new("Save where?").create_prompt_text(),
            SavePathQuery::new("Save where?").create_prompt_text()
        );
    }
}
