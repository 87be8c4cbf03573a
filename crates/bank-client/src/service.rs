//! The client handle shared by every resource operation

use crate::envelope::{Empty, Payload};
use crate::error::{ClientError, ClientResult};
use crate::outcome;
use crate::request::{Request, RequestDefaults};
use crate::transport::{HttpResponse, ReqwestTransport, Transport};
use bank_config::ServiceConfig;
use reqwest::Url;
use tracing::debug;

/// Typed client for the bank service
///
/// Holds only immutable connection settings, so one instance can serve
/// concurrent calls: each call builds its own [`Request`].
pub struct BankService<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
    defaults: RequestDefaults,
}

impl BankService<ReqwestTransport> {
    /// Connect over HTTP using the configured timeout
    pub fn new(config: &ServiceConfig) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> BankService<T> {
    /// Use a caller-supplied transport, e.g. a scripted one in tests
    pub fn with_transport(config: &ServiceConfig, transport: T) -> ClientResult<Self> {
        let raw = config.base_url();
        let base_url = Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: raw,
                reason: "cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            transport,
            base_url,
            defaults: RequestDefaults::from_config(config),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatch a request and return the raw response
    pub(crate) async fn send(&self, request: Request) -> ClientResult<HttpResponse> {
        let http = request.into_http(&self.base_url, &self.defaults)?;
        debug!("{} {}", http.method, http.url);

        let response = self.transport.execute(http).await?;
        Ok(response)
    }

    /// Dispatch a request and decode its envelope as `P`
    pub(crate) async fn exchange<P: Payload>(
        &self,
        request: Request,
        expected: u16,
    ) -> ClientResult<P::Output> {
        let response = self.send(request).await?;
        outcome::decode::<P>(&response, expected)
    }

    /// Dispatch a request whose success carries no resource
    pub(crate) async fn exchange_empty(&self, request: Request, expected: u16) -> ClientResult<()> {
        self.exchange::<Empty>(request, expected).await
    }
}
