// src/error.rs
// Standardized error types for Consult

use std::fmt;
use thiserror::Error;

/// Prefix shown to users in front of any rendered failure
pub const USER_ERROR_PREFIX: &str = "An error occurred: ";

/// Main error type for the Consult library
#[derive(Error, Debug)]
pub enum ConsultError {
    #[error("{env_var} is not set")]
    CredentialMissing { env_var: &'static str },

    #[error("network error: {0}")]
    Network(String),

    #[error("provider rejected request ({status}): {body}")]
    ProviderRejected { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using ConsultError
pub type Result<T> = std::result::Result<T, ConsultError>;

/// Coarse failure category, exposed to API clients alongside the rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CredentialMissing,
    Network,
    ProviderRejected,
    MalformedResponse,
    InvalidInput,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CredentialMissing => "credential_missing",
            Self::Network => "network",
            Self::ProviderRejected => "provider_rejected",
            Self::MalformedResponse => "malformed_response",
            Self::InvalidInput => "invalid_input",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConsultError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CredentialMissing { .. } => ErrorKind::CredentialMissing,
            Self::Network(_) => ErrorKind::Network,
            Self::ProviderRejected { .. } => ErrorKind::ProviderRejected,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::InvalidInput(_) | Self::UnknownPersona(_) => ErrorKind::InvalidInput,
            Self::Config(_) | Self::Template(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }

    /// Render as the single user-facing failure string
    pub fn to_user_string(&self) -> String {
        format!("{}{}", USER_ERROR_PREFIX, self)
    }
}

impl From<reqwest::Error> for ConsultError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ConsultError::MalformedResponse(err.to_string())
        } else {
            ConsultError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ConsultError {
    fn from(err: serde_json::Error) -> Self {
        ConsultError::MalformedResponse(err.to_string())
    }
}

impl From<ConsultError> for String {
    fn from(err: ConsultError) -> Self {
        err.to_user_string()
    }
}
