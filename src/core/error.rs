// src/core/error.rs

use std::fmt;
use std::num::ParseFloatError;

/// Errors raised at the loading edges of the estimator (config, catalog files, lookups).
/// The cost calculation itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorError {
    Config(String),
    ParseError(String),
    UnknownAction(String),
    InvalidMultiplier { key: String, value: f64 },
    Io(String),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorError::Config(msg) => write!(f, "Configuration error: {}", msg),
            EstimatorError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            EstimatorError::UnknownAction(id) => write!(f, "Unknown action: {}", id),
            EstimatorError::InvalidMultiplier { key, value } => {
                write!(f, "Invalid multiplier for '{}': {} (must be finite and > 0)", key, value)
            }
            EstimatorError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for EstimatorError {}

impl From<std::io::Error> for EstimatorError {
    fn from(err: std::io::Error) -> Self {
        EstimatorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        EstimatorError::ParseError(err.to_string())
    }
}

impl From<dotenv::Error> for EstimatorError {
    fn from(err: dotenv::Error) -> Self {
        EstimatorError::Config(format!("dotenv: {}", err))
    }
}

impl From<ParseFloatError> for EstimatorError {
    fn from(err: ParseFloatError) -> Self {
        EstimatorError::Config(err.to_string())
    }
}
