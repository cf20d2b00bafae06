//! Error types for the prediction dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Fetch failures of every kind collapse to the same display state;
//! the variants only matter for diagnostics.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Malformed JSON body
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed response missing required fields
    #[error("Application error: {0}")]
    Application(String),

    /// Unsupported currency code
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl DashboardError {
    /// Short variant name for JSON responses
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "config",
            DashboardError::Network(_) => "network",
            DashboardError::Parse(_) => "parse",
            DashboardError::Application(_) => "application",
            DashboardError::UnsupportedCurrency(_) => "unsupported_currency",
            DashboardError::Worker(_) => "worker",
        }
    }
}

impl From<worker::Error> for DashboardError {
    fn from(err: worker::Error) -> Self {
        DashboardError::Worker(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Network(err.to_string())
    }
}

impl From<DashboardError> for worker::Error {
    fn from(err: DashboardError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}
