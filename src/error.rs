/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Errors returned by the client
#[derive(Debug, Error)]
pub enum AppError {
    /// Connection, proxy or TLS failure before a response was received
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("api error {status}: {body}")]
    Api {
        /// HTTP status returned by the service
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// Login answered successfully at the HTTP level but was rejected
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// JSON decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML decoding failure
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// XML encoding failure
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Response document root did not match the expected element
    #[error("unexpected root element: expected {expected}, found {found}")]
    UnexpectedRoot {
        /// Qualified name the document type expects
        expected: String,
        /// Qualified name found on the wire
        found: String,
    },

    /// A gated protocol flow was invoked while disabled
    #[error("feature disabled: {0}")]
    FeatureDisabled(&'static str),

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// Invalid caller input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status for [`AppError::Api`] errors
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
