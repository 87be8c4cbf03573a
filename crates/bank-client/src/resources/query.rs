use crate::envelope::{Empty, Envelope};
use crate::error::{ClientError, ClientResult};
use crate::outcome::OK;
use crate::request::{QueryParams, Request};
use crate::service::BankService;
use crate::transport::Transport;
use tracing::warn;

impl<T: Transport> BankService<T> {
    /// Run an ad hoc reporting query
    ///
    /// `params` must contain a non-empty `q`; otherwise the call fails
    /// locally without touching the network. On success the raw response
    /// body is returned as-is, since its shape depends on the query.
    pub async fn query(&self, params: &QueryParams) -> ClientResult<Vec<u8>> {
        if params.get("q").map_or(true, str::is_empty) {
            return Err(ClientError::validation("q", "q is required"));
        }

        let request = Request::get("/query").query(params.clone());
        let response = self.send(request).await?;

        if response.status != OK {
            let errors = serde_json::from_slice::<Envelope<Empty>>(&response.body)
                .map(|envelope| envelope.errors)
                .unwrap_or_default();
            warn!("Query returned {}: {:?}", response.status, errors);
            return Err(ClientError::Remote {
                status: response.status,
                errors,
            });
        }

        Ok(response.body)
    }
}
