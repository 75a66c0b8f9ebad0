//! Error types for the bsgreeks library.
//!
//! All fallible operations return `Result<T, GreeksError>` rather than panicking
//! or letting NaN / infinity leak into a rendered report.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, GreeksError>;

/// Errors that can occur while building, pricing, or reporting an option.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GreeksError {
    /// An input is out of its domain (e.g., non-positive spot, negative expiry, NaN).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The closed form is undefined for otherwise valid inputs
    /// (zero volatility with time remaining, non-finite d1/d2).
    #[error("degenerate math: {message}")]
    DegenerateMath { message: String },

    /// Scenario configuration could not be parsed or failed validation.
    #[error("invalid config: {message}")]
    Config { message: String },

    /// Reading from or writing to the terminal failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GreeksError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateMath {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
