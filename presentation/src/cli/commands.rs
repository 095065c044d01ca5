//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A sentence describing the answer
    Text,
    /// JSON object with the query kind and value
    Json,
}

impl From<OutputFormat> for user_query_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => user_query_domain::OutputFormat::Text,
            OutputFormat::Json => user_query_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for user-query
#[derive(Parser, Debug)]
#[command(name = "user-query")]
#[command(author, version, about = "Ask the user a question on the console until they answer it properly")]
#[command(long_about = r#"
user-query prompts on the terminal for a typed value, checks the answer,
and asks again until the answer is acceptable.

Without a subcommand it starts the interactive workbench, which lets you
try every query kind in turn.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./user-query.toml   Project-level config
3. ~/.config/user-query/config.toml   Global config

Example:
  user-query menu -o h=Hit -o s=Stand --preface "Your move?"
  user-query int --min 1 --max 20
  user-query --output json save --preface "Where should the report go?"
"#)]
pub struct Cli {
    /// Query to run (defaults to the interactive workbench)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for the answer
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Give up after this many answers to a single question
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<NonZeroUsize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// The kinds of question that can be asked
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Pick one option from a menu; prints the chosen key
    Menu {
        /// Text shown above the choices
        #[arg(long, default_value = "Which menu item do you choose?")]
        preface: String,

        /// Menu option as KEY=LABEL (repeat for each option, in order)
        #[arg(short = 'o', long = "option", value_name = "KEY=LABEL", required = true, value_parser = parse_menu_option)]
        options: Vec<(String, String)>,
    },

    /// Enter an integer, optionally within bounds
    Int {
        #[arg(long, default_value = "Which integer number do you want?")]
        preface: String,

        /// Smallest accepted value
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Largest accepted value
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// Enter a floating point number, optionally within bounds
    Float {
        #[arg(long, default_value = "Which floating point number do you want?")]
        preface: String,

        /// Smallest accepted value
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        /// Largest accepted value
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
    },

    /// Enter a line of text of limited length
    Text {
        #[arg(long, default_value = "What text do you want to enter?")]
        preface: String,

        /// Maximum number of characters (overrides the configured limit)
        #[arg(long, value_name = "N", conflicts_with = "unlimited")]
        max_length: Option<usize>,

        /// Accept text of any length
        #[arg(long)]
        unlimited: bool,
    },

    /// Enter a path to save to; confirms before overwriting
    Save {
        #[arg(long, default_value = "To what file do you want to save?")]
        preface: String,
    },

    /// Enter a path to open
    Open {
        #[arg(long, default_value = "Which file do you want to open?")]
        preface: String,
    },

    /// Try every query kind interactively
    Workbench,
}

/// Parse `KEY=LABEL` into a menu option pair
pub fn parse_menu_option(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, label)) if !key.is_empty() => Ok((key.to_string(), label.to_string())),
        _ => Err(format!("expected KEY=LABEL, got '{}'", value)),
    }
}
