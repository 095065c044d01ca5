//! Console output formatter for query answers

use crate::output::answer::QueryAnswer;
use colored::Colorize;
use user_query_domain::OutputFormat;

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer in the requested format
    pub fn format(answer: &QueryAnswer, format: OutputFormat, color: bool) -> String {
        match format {
            OutputFormat::Text => Self::format_text(answer, color),
            OutputFormat::Json => Self::format_json(answer),
        }
    }

    /// One human-readable sentence describing the answer
    pub fn format_text(answer: &QueryAnswer, color: bool) -> String {
        let value = match answer {
            QueryAnswer::Menu { key, label } => format!("{} ({})", label, key),
            QueryAnswer::Integer(n) => n.to_string(),
            QueryAnswer::Float(x) => x.to_string(),
            QueryAnswer::Text(text) => format!("'{}'", text),
            QueryAnswer::SavePath(path) | QueryAnswer::OpenPath(path) => {
                path.display().to_string()
            }
        };
        let value = if color {
            value.green().bold().to_string()
        } else {
            value
        };

        match answer {
            QueryAnswer::Menu { .. } => format!("You chose {} from the menu.", value),
            QueryAnswer::Integer(_) => format!("You entered the integer {}.", value),
            QueryAnswer::Float(_) => format!("You entered the floating point number {}.", value),
            QueryAnswer::Text(_) => format!("You entered the text {}.", value),
            QueryAnswer::SavePath(_) | QueryAnswer::OpenPath(_) => {
                format!("You entered this path: {}", value)
            }
        }
    }

    /// Format as JSON
    pub fn format_json(answer: &QueryAnswer) -> String {
        serde_json::to_string(answer).unwrap_or_else(|_| "{}".to_string())
    }

    /// Separator printed between rounds of the workbench
    pub fn separator() -> String {
        "-".repeat(20)
    }

    /// Banner shown when the workbench starts
    pub fn banner(title: &str, color: bool) -> String {
        let line = "-".repeat(43);
        let title = format!("*** {} ***", title);
        if color {
            format!("{}\n{:^43}\n{}", line.cyan(), title.bold(), line.cyan())
        } else {
            format!("{}\n{:^43}\n{}", line, title, line)
        }
    }
}
