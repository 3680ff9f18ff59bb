//! Error types for the Foody scenario harness
//!
//! Setup errors (everything around token acquisition and configuration) abort
//! the run. Scenario-level errors are turned into failed outcomes by the runner.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Authentication Errors ===
    #[error("Authentication endpoint unreachable at {url}: {source}")]
    AuthUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authentication rejected with status {status}: {body}")]
    AuthRejected { status: u16, body: String },

    #[error("Authentication response is not valid JSON: {0}")]
    AuthMalformed(#[source] serde_json::Error),

    #[error("Authentication response has no usable '{field}' field. Check the configured credentials")]
    TokenMissing { field: String },

    // === Transport Errors ===
    #[error("{method} {path} failed: {source}")]
    Transport {
        method: String,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid request URL {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error for a request that never produced a response
    pub fn transport(method: &reqwest::Method, path: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            method: method.to_string(),
            path: path.to_string(),
            source,
        }
    }

    /// Create a token missing error for the given response field
    pub fn token_missing(field: &str) -> Self {
        Self::TokenMissing {
            field: field.to_string(),
        }
    }

    /// Whether this error happened before any scenario could run
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            Error::AuthUnreachable { .. }
                | Error::AuthRejected { .. }
                | Error::AuthMalformed(_)
                | Error::TokenMissing { .. }
                | Error::ClientBuild(_)
                | Error::Config(_)
                | Error::ConfigParse(_)
                | Error::FileRead { .. }
        )
    }
}
