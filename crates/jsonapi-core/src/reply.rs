//! Handler return values
//!
//! Handlers that prefer returning a value over writing into a transport return
//! a [`Reply`]. It implements [`IntoResponse`], so a dispatcher can turn it into
//! an `application/json` response without any content negotiation.
//!
//! ```rust,ignore
//! use jsonapi_core::{Envelope, Reply, Result};
//! use serde_json::json;
//!
//! fn create_widget() -> Result<Reply> {
//!     Reply::created(Envelope::new("Widget created", json!({ "id": 42 })))
//!         .header("location", "/widgets/42")
//! }
//! ```
//!
//! `Location` (201) and `Allow` (405) are never added automatically.

use crate::config::Environment;
use crate::envelope::Envelope;
use crate::error::{EnvelopeError, Result};
use crate::responder::Responder;
use crate::status::ApiStatus;
use crate::transport::{HttpTransport, Response};
use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use http_body_util::Full;
use serde::Serialize;

/// Trait for types that can be converted into an HTTP response
pub trait IntoResponse {
    /// Convert self into a Response
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl<T: IntoResponse, E: IntoResponse> IntoResponse for std::result::Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

// Anything that escapes to this point is an unhandled fault.
impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        fault_response(&self, &Environment::current())
    }
}

/// A status, an envelope and any headers the caller wants on the response.
#[derive(Debug, Clone)]
pub struct Reply<T = serde_json::Value> {
    status: ApiStatus,
    envelope: Envelope<T>,
    headers: HeaderMap,
}

impl<T> Reply<T> {
    /// Create a reply for any whitelisted status.
    pub fn new(status: ApiStatus, envelope: Envelope<T>) -> Self {
        Self {
            status,
            envelope,
            headers: HeaderMap::new(),
        }
    }

    /// The status the reply will be emitted with.
    pub fn status(&self) -> ApiStatus {
        self.status
    }

    /// The envelope that becomes the body.
    pub fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }

    /// Headers added by the caller.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Add a header, e.g. `Location` on 201 or `Allow` on 405.
    ///
    /// Malformed names or values are rejected with
    /// [`EnvelopeError::InvalidHeader`].
    pub fn header<K, V>(self, name: K, value: V) -> Result<Self>
    where
        K: TryInto<HeaderName>,
        K::Error: std::fmt::Display,
        V: TryInto<HeaderValue>,
        V::Error: std::fmt::Display,
    {
        let name = name
            .try_into()
            .map_err(|e| EnvelopeError::invalid_header("<name>", e))?;
        let value = value
            .try_into()
            .map_err(|e| EnvelopeError::invalid_header(name.as_str(), e))?;
        Ok(self.with_header(name, value))
    }

    /// Add an already-validated header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl<T: Serialize> Reply<T> {
    /// Convert using a specific responder's configuration.
    ///
    /// Failures become a 500 envelope; the error is logged.
    pub fn into_response_with(self, responder: &Responder) -> Response {
        let mut transport = HttpTransport::with_headers(self.headers);
        let built = responder
            .respond(&mut transport, self.status, self.envelope)
            .and_then(|()| transport.into_response().map_err(EnvelopeError::from));
        match built {
            Ok(response) => response,
            Err(err) => fault_response(&err, &responder.config().environment),
        }
    }
}

// Configured from `JSONAPI_NO_CONTENT` and `JSONAPI_ENV` on every call.
impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        self.into_response_with(&Responder::default())
    }
}

/// Build the 500 envelope for an unhandled fault.
///
/// The error text is only exposed outside production.
pub(crate) fn fault_response(err: &EnvelopeError, environment: &Environment) -> Response {
    tracing::error!(error = %err, kind = ?err.kind(), "unhandled fault while building response");

    let message = if environment.show_error_details() {
        err.to_string()
    } else {
        ApiStatus::InternalServerError.reason().to_string()
    };
    let body = Envelope::message(message).to_bytes().unwrap_or_else(|_| {
        Bytes::from_static(br#"{"message":"Internal Server Error","data":{}}"#)
    });

    let mut response = http::Response::new(Full::new(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
