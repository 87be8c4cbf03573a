//! Credentials sent with every request

use std::fmt;

/// Header carrying a user's bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header carrying a service-to-service API key
pub const API_KEY_HEADER: &str = "X-Dot-Api-Key";

/// Secrets identifying the caller to the bank service
///
/// Either, both or neither may be set. The service decides which one it
/// honours for a given route.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub user_token: Option<String>,
    pub api_key: Option<String>,
}

impl Credentials {
    /// Credentials for an end user
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            user_token: Some(token.into()),
            api_key: None,
        }
    }

    /// Credentials for another service
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            user_token: None,
            api_key: Some(key.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_token.is_none() && self.api_key.is_none()
    }

    /// The request headers these credentials translate to
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(token) = &self.user_token {
            headers.push((AUTHORIZATION_HEADER, format!("Bearer {token}")));
        }
        if let Some(key) = &self.api_key {
            headers.push((API_KEY_HEADER, key.clone()));
        }
        headers
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(secret: &Option<String>) -> Option<&'static str> {
            secret.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("Credentials")
            .field("user_token", &redact(&self.user_token))
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}
