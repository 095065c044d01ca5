//! CLI entrypoint for user-query
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::num::NonZeroUsize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use user_query_application::{MenuQuery, QueryExecutor};
use user_query_domain::MenuOptions;
use user_query_infrastructure::ConfigLoader;
use user_query_presentation::{
    Asker, Cli, Command, ConsoleConfig, ConsoleFormatter, ConsoleResponseSource, QueryAnswer,
    Workbench,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never land in the middle of a prompt
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    info!("Starting user-query");

    let color = config.output.color && !cli.no_color;
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let source = ConsoleResponseSource::new().with_config(ConsoleConfig { color });
    let max_attempts = cli
        .max_attempts
        .map(NonZeroUsize::get)
        .or(config.query.max_attempts);
    let executor = match max_attempts {
        Some(attempts) => QueryExecutor::new().with_max_attempts(attempts),
        None => QueryExecutor::new(),
    };
    let asker = Asker::new(&source).with_executor(executor);

    let answer = match cli.command.unwrap_or(Command::Workbench) {
        Command::Workbench => {
            let completed = Workbench::new(asker, io::stdout())
                .with_color(color)
                .with_text_limit(config.text.limit())
                .run()?;
            info!(completed, "Workbench finished");
            return Ok(());
        }
        Command::Menu { preface, options } => {
            let query = MenuQuery::new(preface, MenuOptions::new(options)?);
            let key = asker.run(&query)?;
            let label = query.options().label(&key).unwrap_or_default().to_string();
            QueryAnswer::Menu { key, label }
        }
        Command::Int { preface, min, max } => QueryAnswer::Integer(asker.int(&preface, min, max)?),
        Command::Float { preface, min, max } => {
            QueryAnswer::Float(asker.float(&preface, min, max)?)
        }
        Command::Text {
            preface,
            max_length,
            unlimited,
        } => {
            let limit = if unlimited {
                None
            } else {
                max_length.or(config.text.limit())
            };
            QueryAnswer::Text(asker.text(&preface, limit)?)
        }
        Command::Save { preface } => QueryAnswer::SavePath(asker.path_save(&preface)?),
        Command::Open { preface } => QueryAnswer::OpenPath(asker.path_open(&preface)?),
    };

    info!(kind = answer.kind(), "Writing answer");
    println!("{}", ConsoleFormatter::format(&answer, format, color));

    Ok(())
}
