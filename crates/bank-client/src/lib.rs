//! Typed client for the bank service
//!
//! Every operation follows the same exchange: build a [`Request`], hand it
//! to a [`Transport`], decode the `{message, data, errors}` envelope and
//! compare the status against the one the operation expects.
//!
//! # Example
//!
//! ```ignore
//! use bank_client::BankService;
//! use bank_config::ServiceConfig;
//!
//! let service = BankService::new(&ServiceConfig::from_env()?)?;
//! let accounts = service.get_user_accounts(user).await?;
//! ```

mod envelope;
mod error;
mod outcome;
mod request;
mod resources;
mod service;
pub mod testing;
mod transport;

pub use envelope::{Empty, Envelope, Payload};
pub use error::{ClientError, ClientResult, FieldErrors, TransportError};
pub use outcome::{CREATED, OK};
pub use request::{QueryParams, Request, RequestDefaults, DATE_FORMAT};
pub use resources::DateRange;
pub use service::BankService;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

pub use bank_config::{Credentials, ServiceConfig};
