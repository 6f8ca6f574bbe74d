//! # jsonapi core
//!
//! Core library providing the status table, the `{message, data}` envelope and
//! the [`Responder`] that writes envelopes into a [`Transport`].
//!
//! This crate is not meant to be used directly. Use `jsonapi-rs` instead.

mod config;
mod envelope;
mod error;
mod reply;
mod responder;
pub mod status;
#[cfg(any(test, feature = "test-utils"))]
mod testing;
mod transport;

// Public API
pub use config::{EnvelopeConfig, Environment, NoContentPolicy, ENV_PREFIX};
#[cfg(feature = "config")]
pub use config::{load_dotenv, load_dotenv_from, ConfigError};
pub use envelope::{empty_data, Envelope};
pub use error::{EnvelopeError, ErrorKind, Result, TransportError};
pub use reply::{IntoResponse, Reply};
pub use responder::Responder;
pub use status::{automatic_redirect_allowed, ApiStatus};
#[cfg(any(test, feature = "test-utils"))]
pub use testing::TestResponse;
pub use transport::{HttpTransport, Response, Transport};
