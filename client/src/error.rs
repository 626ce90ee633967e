//! Error handling for the dashboard client
//!
//! Every failure returns control to the caller with form state intact;
//! nothing here is fatal to the application.

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    // Caught before any remote call
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    // Data-availability conditions
    #[error("{resource} not found")]
    NotFound { resource: String },

    // Remote call failures
    #[error("API rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    // Local failures
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl ClientError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        ClientError::NotFound {
            resource: resource.into(),
        }
    }

    /// The text a screen should surface for this failure: the
    /// server-supplied message when there is one, a generic fallback
    /// otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::NotFound { resource } => format!("{} not found", resource),
            ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
            ClientError::Unauthorized(_) => "You are not signed in".to_string(),
            _ => "Something went wrong, please try again".to_string(),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
