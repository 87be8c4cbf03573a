//! Error types for bank service calls

use std::collections::BTreeMap;
use thiserror::Error;

/// Field-keyed messages reported by the service, e.g. `{"q": ["q is required"]}`
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result type for bank service calls
pub type ClientResult<T> = Result<T, ClientError>;

static NO_ERRORS: FieldErrors = BTreeMap::new();

/// Failure to obtain any response from the service
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client failed (connect, timeout, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other transport reporting that no response was produced
    #[error("no response: {0}")]
    Unavailable(String),
}

/// Errors returned by every bank service operation
#[derive(Debug, Error)]
pub enum ClientError {
    /// The call was rejected locally and never sent
    #[error("invalid request: {}", render(.errors))]
    Validation { errors: FieldErrors },

    /// The request did not produce a response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not the expected envelope
    #[error("failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Query parameters could not be encoded
    #[error("failed to encode query string: {0}")]
    EncodeQuery(#[from] serde_urlencoded::ser::Error),

    /// The configured scheme and host do not form a usable URL
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The service answered with a status other than the one expected
    #[error("bank service returned {status}: {}", render(.errors))]
    Remote { status: u16, errors: FieldErrors },
}

impl ClientError {
    /// A local validation failure for a single field
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self::Validation { errors }
    }

    /// The HTTP status a caller should associate with this error
    ///
    /// Validation failures report 400 as the service would. `None` means no
    /// response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(400),
            Self::Remote { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(_)
            | Self::Encode(_)
            | Self::EncodeQuery(_)
            | Self::InvalidBaseUrl { .. } => None,
        }
    }

    /// Field-keyed messages, empty when the error carries none
    pub fn errors(&self) -> &FieldErrors {
        match self {
            Self::Validation { errors } | Self::Remote { errors, .. } => errors,
            _ => &NO_ERRORS,
        }
    }
}

fn render(errors: &FieldErrors) -> String {
    if errors.is_empty() {
        return "no details".to_string();
    }
    errors
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
