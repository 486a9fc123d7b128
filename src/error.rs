use crate::config::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Configuration Error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Error {status}: {body}")]
    Connection { status: u16, body: String },
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl EstimatorError {
    /// Configuration and connection failures are reported to the user as a plain diagnostic.
    /// Everything else is a fault.
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            EstimatorError::Configuration(_) | EstimatorError::Connection { .. }
        )
    }
}
