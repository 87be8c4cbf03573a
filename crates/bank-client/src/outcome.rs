//! Turning a response into a value or an error
//!
//! A response is a success only when its status equals the one the
//! operation expects (200 for reads, updates and deletes, 201 for creates).
//! Anything else becomes [`ClientError::Remote`] carrying the envelope's
//! field errors. There are no retries and no status ranges.

use crate::envelope::{Empty, Envelope, Payload};
use crate::error::{ClientError, ClientResult};
use crate::transport::HttpResponse;
use tracing::{trace, warn};

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;

/// Decode `response` as an envelope around `P` and check its status
pub fn decode<P: Payload>(response: &HttpResponse, expected: u16) -> ClientResult<P::Output> {
    trace!(
        "Decoding {} byte response with status {}",
        response.body.len(),
        response.status
    );

    if response.status != expected {
        return Err(remote_error(response, expected)?);
    }

    let envelope: Envelope<P> =
        serde_json::from_slice(&response.body).map_err(|source| ClientError::Decode {
            status: response.status,
            source,
        })?;

    Ok(envelope.data.into_output())
}

/// The error for a response whose status is not `expected`
///
/// Fails with [`ClientError::Decode`] when the body is not an envelope.
fn remote_error(response: &HttpResponse, expected: u16) -> ClientResult<ClientError> {
    let envelope: Envelope<Empty> =
        serde_json::from_slice(&response.body).map_err(|source| ClientError::Decode {
            status: response.status,
            source,
        })?;

    warn!(
        "Bank service returned {} (expected {}): {:?}",
        response.status, expected, envelope.errors
    );

    Ok(ClientError::Remote {
        status: response.status,
        errors: envelope.errors,
    })
}
