use thiserror::Error;

/// Referrer block error types.
///
/// Only configuration loading can fail. Classification itself never errors.
#[derive(Error, Debug)]
pub enum ReferrerBlockError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Unknown rule category: {0}")]
    UnknownCategory(String),

    #[error("Invalid TLD rule (must start with '.'): {0}")]
    InvalidTld(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReferrerBlockError>;
