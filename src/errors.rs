/*!
 * Error types for the scriptline application.
 *
 * The classification core is total and never fails. These errors cover the
 * edges around it: building a classifier from a vocabulary, parsing element
 * names, addressing lines in a document and loading configuration.
 */

use thiserror::Error;

/// Errors that can occur while working with screenplay text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A vocabulary phrase could not be turned into a pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// An element name that is not one of the eight kinds
    #[error("Unknown element kind: {0}")]
    UnknownElementKind(String),

    /// A line index past the end of the document
    #[error("Line {index} is out of range (document has {line_count} lines)")]
    LineOutOfRange {
        /// Requested zero-based line
        index: usize,
        /// Number of lines in the document
        line_count: usize,
    },
}

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from screenplay processing
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
