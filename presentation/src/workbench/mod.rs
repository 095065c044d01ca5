//! Interactive workbench for trying every query kind by hand.
//!
//! Loops on a top-level menu until the user picks quit:
//!
//! ```text
//! How do you want to use the workbench?
//! Choose (q)Quit, (m)Menu Query, (i)Integer Query, (f)Float Query, (t)Text Query, (o)File Open, (s)File Save:
//! ```
//!
//! Each pick runs one sample query through the same response source and
//! prints the answer.

use crate::ask::{AskError, Asker};
use crate::output::{ConsoleFormatter, QueryAnswer};
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;
use user_query_application::MenuQuery;
use user_query_domain::{DEFAULT_MAX_LENGTH, MenuOptions};

const CHOICES: [(&str, &str); 7] = [
    ("q", "Quit"),
    ("m", "Menu Query"),
    ("i", "Integer Query"),
    ("f", "Float Query"),
    ("t", "Text Query"),
    ("o", "File Open"),
    ("s", "File Save"),
];

const SAMPLE_MENU: [(&str, &str); 3] = [("a", "Option A"), ("b", "Option B"), ("c", "Option C")];

/// Errors that stop the workbench
#[derive(Error, Debug)]
pub enum WorkbenchError {
    #[error(transparent)]
    Ask(#[from] AskError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// The interactive demo loop
pub struct Workbench<'a, W: Write> {
    asker: Asker<'a>,
    out: W,
    color: bool,
    text_limit: Option<usize>,
}

impl<'a, W: Write> Workbench<'a, W> {
    pub fn new(asker: Asker<'a>, out: W) -> Self {
        Self {
            asker,
            out,
            color: true,
            text_limit: Some(DEFAULT_MAX_LENGTH),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Length limit used by the text sample query
    pub fn with_text_limit(mut self, limit: Option<usize>) -> Self {
        self.text_limit = limit;
        self
    }

    /// Run until the user quits. Returns how many sample queries ran.
    pub fn run(&mut self) -> Result<usize, WorkbenchError> {
        writeln!(
            self.out,
            "{}",
            ConsoleFormatter::banner("UserQuery Testing Workbench", self.color)
        )?;

        let choices = MenuQuery::new(
            "How do you want to use the workbench?",
            MenuOptions::new(CHOICES).map_err(AskError::from)?,
        );
        let mut completed = 0;

        loop {
            let choice = self.asker.run(&choices)?;
            debug!(choice = %choice, "Workbench selection");
            let answer = match choice.as_str() {
                "q" => break,
                "m" => self.sample_menu()?,
                "i" => QueryAnswer::Integer(self.asker.int(
                    "Which integer number do you want?",
                    None,
                    Some(1000),
                )?),
                "f" => QueryAnswer::Float(self.asker.float(
                    "Which floating point number do you want?",
                    None,
                    None,
                )?),
                "t" => QueryAnswer::Text(
                    self.asker
                        .text("What text do you want to enter?", self.text_limit)?,
                ),
                "o" => QueryAnswer::OpenPath(
                    self.asker.path_open("Which file do you want to open?")?,
                ),
                "s" => QueryAnswer::SavePath(
                    self.asker.path_save("To what file do you want to save?")?,
                ),
                _ => continue,
            };

            writeln!(self.out, "{}", ConsoleFormatter::format_text(&answer, self.color))?;
            writeln!(self.out, "{}", ConsoleFormatter::separator())?;
            completed += 1;
        }

        Ok(completed)
    }

    fn sample_menu(&self) -> Result<QueryAnswer, AskError> {
        let options = MenuOptions::new(SAMPLE_MENU)?;
        let key = self
            .asker
            .run(&MenuQuery::new("Which menu item do you choose?", options.clone()))?;
        let label = options.label(&key).unwrap_or_default().to_string();
        Ok(QueryAnswer::Menu { key, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_query_application::ScriptedResponseSource;

    fn run_script(lines: &[&str]) -> (Result<usize, WorkbenchError>, String, ScriptedResponseSource) {
        let source = ScriptedResponseSource::new(lines.iter().copied());
        let mut out = Vec::new();
        let result = Workbench::new(Asker::new(&source), &mut out)
            .with_color(false)
            .run();
        (result, String::from_utf8(out).unwrap(), source)
    }

    #[test]
    fn test_quit_immediately() {
        let (result, out, _) = run_script(&["q"]);
        assert_eq!(result.unwrap(), 0);
        assert!(out.contains("*** UserQuery Testing Workbench ***"));
    }

    #[test]
    fn test_runs_queries_until_quit() {
        let (result, out, source) = run_script(&["m", "z", "b", "i", "5000", "42", "f", "2.5", "q"]);

        assert_eq!(result.unwrap(), 3);
        assert!(out.contains("You chose Option B (b) from the menu."));
        assert!(out.contains("You entered the integer 42."));
        assert!(out.contains("You entered the floating point number 2.5."));
        assert_eq!(
            source.error_messages(),
            vec![
                "'z' is not a valid response. Please try again.",
                "'5000' is greater than 1000. Please try again.",
            ]
        );
    }

    #[test]
    fn test_text_limit_applies() {
        let source = ScriptedResponseSource::new(["t", "abcdef", "abc", "q"]);
        let mut out = Vec::new();
        let completed = Workbench::new(Asker::new(&source), &mut out)
            .with_color(false)
            .with_text_limit(Some(3))
            .run()
            .unwrap();

        assert_eq!(completed, 1);
        assert!(String::from_utf8(out).unwrap().contains("You entered the text 'abc'."));
        assert_eq!(source.error_messages().len(), 1);
    }

    #[test]
    fn test_closed_input_stops_workbench() {
        let (result, _, _) = run_script(&["i"]);
        match result {
            Err(WorkbenchError::Ask(e)) => assert!(e.is_closed()),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
