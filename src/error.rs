use thiserror::Error;

/// Errors surfaced at the command-line boundary.
///
/// The recipe record, formatter, and store never fail: everything here
/// comes from parsing user input or loading configuration, and a parse
/// failure only aborts the offending command, never the session.
#[derive(Error, Debug)]
pub enum RecipeManagerError {
    /// Command word not recognized
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// A numeric argument did not parse
    #[error("Not a number: {0}")]
    InvalidNumber(#[from] std::num::ParseFloatError),

    /// An id or index argument did not parse
    #[error("Not a whole number: {0}")]
    InvalidInteger(#[from] std::num::ParseIntError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal input or output failed
    #[error("Input error: {0}")]
    IoError(#[from] std::io::Error),
}
