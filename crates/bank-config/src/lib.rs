//! Connection settings for the bank service
//!
//! A [`ServiceConfig`] names where the service lives (scheme and host), how
//! long a call may take, and the [`Credentials`] sent with every request.
//! It can be built in code, read from the environment, or loaded from a YAML
//! file with environment overrides:
//!
//! ```yaml
//! scheme: https
//! host: bank.internal:8443
//! token: eyJhbGciOi...
//! timeout_secs: 10
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bank_config::ServiceConfig;
//!
//! let config = ServiceConfig::load("bank.yaml")?;
//! println!("{}", config.base_url());
//! ```

mod credentials;
mod error;
mod loader;

pub use credentials::{Credentials, API_KEY_HEADER, AUTHORIZATION_HEADER};
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ServiceConfig, API_KEY_VAR, DEFAULT_TIMEOUT, HOST_VAR, SCHEME_VAR, TIMEOUT_VAR, TOKEN_VAR,
};
