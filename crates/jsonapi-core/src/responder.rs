//! The envelope builder
//!
//! [`Responder`] maps a status, a message and a payload onto a [`Transport`]:
//! the status goes on the status line, `{message, data}` becomes the JSON body,
//! and the transport is finalized. It holds only immutable configuration, so a
//! single instance can be cloned into every handler or shared across threads.
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonapi_core::{Envelope, HttpTransport, Responder};
//! use serde_json::json;
//!
//! let responder = Responder::default();
//!
//! // write into a transport owned by the request
//! let mut transport = HttpTransport::new();
//! responder.created(&mut transport, Envelope::new("Widget created", json!({ "id": 42 })))?;
//!
//! // or get a finished response back
//! let response = responder.build(ApiStatus::NotFound, Envelope::empty())?;
//! ```
//!
//! The named methods (`ok`, `created`, `not_found`, ...) are generated from the
//! status table in [`crate::status`].

use crate::config::{EnvelopeConfig, NoContentPolicy};
use crate::envelope::Envelope;
use crate::error::{EnvelopeError, Result};
use crate::status::ApiStatus;
use crate::transport::{HttpTransport, Response, Transport};
use http::{header, HeaderValue};
use serde::Serialize;
use std::sync::Arc;

const APPLICATION_JSON: &str = "application/json";

/// Builds `{message, data}` envelopes and writes them into a transport.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    config: Arc<EnvelopeConfig>,
}

impl Responder {
    /// Create a responder with an explicit configuration.
    pub fn new(config: EnvelopeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build a responder from `JSONAPI_` environment variables.
    #[cfg(feature = "config")]
    pub fn from_env() -> std::result::Result<Self, crate::config::ConfigError> {
        EnvelopeConfig::from_env().map(Self::new)
    }

    /// The configuration every envelope is emitted with.
    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Write `envelope` into `transport` with `status`, then finalize it.
    ///
    /// The body is serialized before the transport is touched: a payload that
    /// cannot be serialized leaves the transport unwritten.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::UnsupportedStatus`] if `status` is disabled in this build
    /// - [`EnvelopeError::InvalidData`] if the payload is not an object or array
    /// - [`EnvelopeError::Serialization`] if the payload cannot be serialized
    /// - [`EnvelopeError::Transport`] if the transport rejects a write
    pub fn respond<Tr, T>(
        &self,
        transport: &mut Tr,
        status: ApiStatus,
        envelope: Envelope<T>,
    ) -> Result<()>
    where
        Tr: Transport + ?Sized,
        T: Serialize,
    {
        if !status.is_enabled() {
            tracing::warn!(status = status.code(), "status is not enabled in this build");
            return Err(EnvelopeError::UnsupportedStatus(status.code()));
        }

        let body = match envelope.to_bytes() {
            Ok(body) => body,
            Err(err) => {
                if err.is_caller_misuse() {
                    tracing::warn!(
                        status = status.code(),
                        error = %err,
                        "rejected envelope payload"
                    );
                } else {
                    tracing::error!(
                        status = status.code(),
                        error = %err,
                        "envelope serialization failed"
                    );
                }
                return Err(err);
            }
        };

        if status == ApiStatus::InternalServerError {
            tracing::error!(
                message = %envelope.message,
                "emitting 500 envelope; reserved for unhandled faults"
            );
        }

        transport.set_status(status.as_status_code())?;
        let bodyless =
            status == ApiStatus::NoContent && self.config.no_content == NoContentPolicy::Empty;
        let body_len = if bodyless {
            0
        } else {
            transport.set_header(
                header::CONTENT_TYPE,
                HeaderValue::from_static(APPLICATION_JSON),
            )?;
            let len = body.len();
            transport.set_body(body)?;
            len
        };
        transport.finalize()?;

        tracing::debug!(status = status.code(), body_len, "envelope emitted");
        Ok(())
    }

    /// Like [`respond`](Self::respond), but takes a raw numeric code.
    ///
    /// Codes outside the whitelist fail with
    /// [`EnvelopeError::UnsupportedStatus`] and nothing is written.
    pub fn respond_with_code<Tr, T>(
        &self,
        transport: &mut Tr,
        code: u16,
        envelope: Envelope<T>,
    ) -> Result<()>
    where
        Tr: Transport + ?Sized,
        T: Serialize,
    {
        let status = ApiStatus::try_from(code).map_err(|err| {
            tracing::warn!(code, "rejected status code outside the whitelist");
            err
        })?;
        self.respond(transport, status, envelope)
    }

    /// Run [`respond`](Self::respond) against a fresh [`HttpTransport`] and
    /// return the finished response.
    pub fn build<T: Serialize>(
        &self,
        status: ApiStatus,
        envelope: Envelope<T>,
    ) -> Result<Response> {
        let mut transport = HttpTransport::new();
        self.respond(&mut transport, status, envelope)?;
        Ok(transport.into_response()?)
    }
}
