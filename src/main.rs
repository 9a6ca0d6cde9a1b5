use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::lexer::tokenize;
use crate::render::{write_tokens, OutputFormat};
use crate::shell::Shell;

mod config;
mod error;
mod lexer;
mod render;
mod shell;
mod token;

#[derive(Parser)]
#[command(author, version, about = "Arithmetic expression lexer shell")]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, global = true, env = "ARITH_CONFIG")]
    config: Option<PathBuf>,

    /// Token output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Prompt shown before each line
    #[arg(short, long, global = true)]
    prompt: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lex a single line and print its tokens
    Lex {
        /// The line to lex
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
    /// Manage shell configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with defaults
    Init,
    /// Print the config file location
    Path,
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("ARITH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config_path = cli.config.unwrap_or_else(ShellConfig::get_config_path);
    let mut config = ShellConfig::load(&config_path)?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), config);
            shell.run()?;
        }
        Some(Commands::Lex { line }) => {
            write_tokens(&mut io::stdout().lock(), tokenize(&line), config.format)?;
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommands::Init => {
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                } else {
                    ShellConfig::default().save(&config_path)?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
            ConfigCommands::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lex_accepts_leading_minus() {
        let cli = Cli::try_parse_from(["arith", "lex", "-5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Lex { ref line }) if line == "-5"));
    }

    #[test]
    fn global_format_flag() {
        let cli = Cli::try_parse_from(["arith", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.command.is_none());
    }
}
