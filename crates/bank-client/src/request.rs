//! Building requests
//!
//! Resource paths are templates whose trailing `-` segment is a literal
//! placeholder. Identifiers are never spliced into the path; they always
//! travel as the `uuid` query parameter. A [`Request`] is built fresh for
//! every call and turned into an [`HttpRequest`] without touching any
//! shared state.

use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpRequest, Method};
use bank_config::ServiceConfig;
use bank_core::Uuid;
use chrono::NaiveDate;
use reqwest::Url;
use serde::Serialize;

/// Wire format of date-only query parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered, multi-valued query parameters
///
/// Encoding sorts by key; values under the same key keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, keeping any existing values for the key
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Builder form of [`QueryParams::append`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Replace every value for `key` with `value`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.into()));
        self
    }

    /// Whether any value is present for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The first value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` form, keys sorted
    pub fn encode(&self) -> ClientResult<String> {
        let mut sorted: Vec<&(String, String)> = self.pairs.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(serde_urlencoded::to_string(sorted)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Headers and query values attached to every request
///
/// Credential headers come first and cannot be overridden by configured
/// headers of the same name. Default query values apply only to keys the
/// call does not set itself.
#[derive(Debug, Clone, Default)]
pub struct RequestDefaults {
    headers: Vec<(String, String)>,
    query: QueryParams,
}

impl RequestDefaults {
    pub fn from_config(config: &ServiceConfig) -> Self {
        let mut headers: Vec<(String, String)> = config
            .credentials
            .headers()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        for (name, value) in &config.headers {
            if !headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)) {
                headers.push((name.clone(), value.clone()));
            }
        }

        Self {
            headers,
            query: config.query.iter().cloned().collect(),
        }
    }
}

/// One logical call against the service
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: &'static str,
    query: QueryParams,
    body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: &'static str) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Identify the target record via `uuid=<id>`
    pub fn uuid(self, id: Uuid) -> Self {
        self.param("uuid", id.to_string())
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.append(key, value);
        self
    }

    /// Add a date-only parameter as `YYYY-MM-DD`
    pub fn date(self, key: &str, date: NaiveDate) -> Self {
        self.param(key, date.format(DATE_FORMAT).to_string())
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Serialize `payload` as the JSON body
    pub fn json<P: Serialize + ?Sized>(mut self, payload: &P) -> ClientResult<Self> {
        self.body = Some(serde_json::to_vec(payload)?);
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Resolve against the service's base URL and attach the defaults
    pub fn into_http(self, base: &Url, defaults: &RequestDefaults) -> ClientResult<HttpRequest> {
        let mut url = base.join(self.path).map_err(|e| ClientError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        let mut query = self.query;
        let own: Vec<String> = query.iter().map(|(k, _)| k.to_string()).collect();
        for (key, value) in defaults.query.iter() {
            if !own.iter().any(|k| k == key) {
                query.append(key, value);
            }
        }
        if !query.is_empty() {
            url.set_query(Some(&query.encode()?));
        }

        let mut headers = defaults.headers.clone();
        if self.body.is_some() {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}
