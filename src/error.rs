use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the shell around the lexer.
///
/// Lexing itself cannot fail; malformed input becomes `Kind::Bad` tokens.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),

    #[error("ConfigError: {} is not valid: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("OutputError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("LoggingError: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
