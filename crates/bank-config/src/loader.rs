//! Assembling a [`ServiceConfig`] from the environment and YAML files

use crate::credentials::Credentials;
use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const SCHEME_VAR: &str = "BANK_SERVICE_SCHEME";
pub const HOST_VAR: &str = "BANK_SERVICE_HOST";
pub const TOKEN_VAR: &str = "BANK_SERVICE_TOKEN";
pub const API_KEY_VAR: &str = "BANK_SERVICE_API_KEY";
pub const TIMEOUT_VAR: &str = "BANK_SERVICE_TIMEOUT_SECS";

/// Timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the bank service lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// `http` or `https`
    pub scheme: String,
    /// Host with optional port, e.g. `bank.internal:8443`
    pub host: String,
    pub credentials: Credentials,
    /// Upper bound for a single request, enforced by the transport
    pub timeout: Duration,
    /// Extra headers sent with every request
    pub headers: Vec<(String, String)>,
    /// Query values sent with every request unless the call sets the same key
    pub query: Vec<(String, String)>,
}

impl ServiceConfig {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> ConfigResult<Self> {
        let config = Self {
            scheme: scheme.into(),
            host: host.into(),
            credentials: Credentials::default(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
            query: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> ConfigResult<Self> {
        self.timeout = timeout;
        self.validate()?;
        Ok(self)
    }

    /// Send `name: value` with every request
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ConfigResult<Self> {
        self.headers.push((name.into(), value.into()));
        self.validate()?;
        Ok(self)
    }

    /// Send `key=value` with every request
    pub fn with_query_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ConfigResult<Self> {
        self.query.push((key.into(), value.into()));
        self.validate()?;
        Ok(self)
    }

    /// `scheme://host`, without a trailing slash
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Load configuration from `BANK_SERVICE_*` environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// Behaves like [`ServiceConfig::from_env`] but reads through `lookup`,
    /// which keeps callers and tests away from process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut partial = Partial::default();
        partial.apply_lookup(&lookup)?;
        partial.build()
    }

    /// Load a YAML file, letting `BANK_SERVICE_*` variables override it
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// Load a YAML file, letting variables from `lookup` override it
    pub fn load_with(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading service config: {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut partial = Partial::from_file(file, path);
        partial.apply_lookup(&lookup)?;
        partial.build()
    }

    /// Check the invariants every constructor enforces
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(invalid("scheme", format!("expected http or https, got '{}'", self.scheme)));
        }
        if self.host.trim().is_empty() {
            return Err(invalid("host", "must not be empty"));
        }
        if self.host.contains('/') || self.host.chars().any(char::is_whitespace) {
            return Err(invalid("host", format!("'{}' is not a host[:port]", self.host)));
        }
        if self.timeout.is_zero() {
            return Err(invalid("timeout_secs", "must be greater than zero"));
        }
        for (name, value) in &self.headers {
            if !is_header_name(name) {
                return Err(invalid("headers", format!("'{name}' is not a header name")));
            }
            if value.contains(['\r', '\n']) {
                return Err(invalid("headers", format!("value of '{name}' spans lines")));
            }
        }
        if self.query.iter().any(|(key, _)| key.is_empty()) {
            return Err(invalid("query", "keys must not be empty"));
        }
        Ok(())
    }
}

/// On-disk layout of a config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    scheme: Option<String>,
    host: Option<String>,
    token: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    #[serde(default)]
    query: BTreeMap<String, String>,
}

/// Values gathered so far, before validation
#[derive(Debug, Default)]
struct Partial {
    scheme: Option<String>,
    host: Option<String>,
    token: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    source: Option<PathBuf>,
}

impl Partial {
    fn from_file(file: FileConfig, path: &Path) -> Self {
        Self {
            scheme: file.scheme,
            host: file.host,
            token: file.token,
            api_key: file.api_key,
            timeout: file.timeout_secs.map(Duration::from_secs),
            headers: file.headers.into_iter().collect(),
            query: file.query.into_iter().collect(),
            source: Some(path.to_path_buf()),
        }
    }

    fn apply_lookup(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(scheme) = var(SCHEME_VAR) {
            self.scheme = Some(scheme);
        }
        if let Some(host) = var(HOST_VAR) {
            self.host = Some(host);
        }
        if let Some(token) = var(TOKEN_VAR) {
            self.token = Some(token);
        }
        if let Some(key) = var(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(raw) = var(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| invalid(TIMEOUT_VAR, format!("'{raw}' is not a number of seconds")))?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(())
    }

    fn build(self) -> ConfigResult<ServiceConfig> {
        let scheme = self.required(self.scheme.clone(), "scheme", SCHEME_VAR)?;
        let host = self.required(self.host.clone(), "host", HOST_VAR)?;

        let config = ServiceConfig {
            scheme: scheme.to_ascii_lowercase(),
            host,
            credentials: Credentials {
                user_token: self.token,
                api_key: self.api_key,
            },
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            headers: self.headers,
            query: self.query,
        };
        config.validate()?;

        debug!(
            "Service config resolved: {} (timeout {:?})",
            config.base_url(),
            config.timeout
        );
        Ok(config)
    }

    fn required(&self, value: Option<String>, key: &str, var: &str) -> ConfigResult<String> {
        match (value, &self.source) {
            (Some(value), _) => Ok(value),
            (None, None) => Err(ConfigError::EnvVarNotFound {
                var: var.to_string(),
            }),
            (None, Some(path)) => Err(invalid(
                key,
                format!("not set in {} or {}", path.display(), var),
            )),
        }
    }
}

/// RFC 7230 `token` characters
fn is_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}
