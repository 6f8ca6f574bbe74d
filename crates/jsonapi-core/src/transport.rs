//! The per-request response channel
//!
//! [`Responder`](crate::Responder) never touches ambient framework state. It
//! writes into whatever implements [`Transport`], which is owned by the request
//! and passed in explicitly.

use crate::error::TransportError;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use http_body_util::Full;

/// HTTP Response type
pub type Response = http::Response<Full<Bytes>>;

/// A response object an envelope can be written into.
///
/// Once [`finalize`](Transport::finalize) succeeds every further write must fail
/// with [`TransportError::AlreadyFinalized`].
pub trait Transport {
    /// Set the status line.
    fn set_status(&mut self, status: StatusCode) -> Result<(), TransportError>;

    /// Insert a header, replacing any previous value with the same name.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> Result<(), TransportError>;

    /// Set the serialized body.
    fn set_body(&mut self, body: Bytes) -> Result<(), TransportError>;

    /// Mark the response as complete for this request cycle.
    fn finalize(&mut self) -> Result<(), TransportError>;
}

/// In-memory transport that produces an [`http::Response`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    finalized: bool,
}

impl HttpTransport {
    /// A fresh, unwritten response (200, no headers, empty body).
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            finalized: false,
        }
    }

    /// Start from caller-supplied headers, e.g. `Location` or `Allow`.
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            headers,
            ..Self::new()
        }
    }

    /// Status written so far.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Headers written so far.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body written so far, empty until `set_body`.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Whether `finalize` has completed the response.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Convert into the finished response.
    ///
    /// Fails with [`TransportError::NotFinalized`] if nothing completed the
    /// response, so a half-built response can never be sent.
    pub fn into_response(self) -> Result<Response, TransportError> {
        if !self.finalized {
            return Err(TransportError::NotFinalized);
        }
        let mut response = http::Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        Ok(response)
    }

    fn writable(&self) -> Result<(), TransportError> {
        if self.finalized {
            Err(TransportError::AlreadyFinalized)
        } else {
            Ok(())
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn set_status(&mut self, status: StatusCode) -> Result<(), TransportError> {
        self.writable()?;
        self.status = status;
        Ok(())
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> Result<(), TransportError> {
        self.writable()?;
        self.headers.insert(name, value);
        Ok(())
    }

    fn set_body(&mut self, body: Bytes) -> Result<(), TransportError> {
        self.writable()?;
        self.body = body;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), TransportError> {
        self.writable()?;
        self.finalized = true;
        Ok(())
    }
}
