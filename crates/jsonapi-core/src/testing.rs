//! Assertions over finished responses
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonapi_core::{ApiStatus, Envelope, Responder, TestResponse};
//!
//! #[tokio::test]
//! async fn test_not_found() {
//!     let response = Responder::default().build(ApiStatus::NotFound, Envelope::empty()).unwrap();
//!     TestResponse::from_response(response)
//!         .await
//!         .assert_status(404)
//!         .assert_envelope("", &serde_json::json!({}));
//! }
//! ```

use crate::envelope::Envelope;
use crate::transport::Response;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response whose body has been collected.
#[derive(Debug, Clone)]
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    /// Collect the body of a response.
    pub async fn from_response(response: Response) -> Self {
        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map(|b| b.to_bytes())
            .unwrap_or_default();

        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, lossy for invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Parse the body as an envelope.
    ///
    /// # Panics
    ///
    /// Panics if the body is not an envelope.
    pub fn envelope(&self) -> Envelope {
        self.json()
            .unwrap_or_else(|e| panic!("body is not an envelope ({e}): {}", self.text()))
    }

    /// # Panics
    ///
    /// Panics if the status code doesn't match.
    pub fn assert_status(&self, expected: u16) -> &Self {
        assert_eq!(
            self.status.as_u16(), expected,
            "Expected status {}, got {}. Body: {}",
            expected, self.status, self.text()
        );
        self
    }

    /// # Panics
    ///
    /// Panics if the header is missing or has a different value.
    pub fn assert_header(&self, key: &str, expected: &str) -> &Self {
        let actual = self
            .headers
            .get(key)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(
            actual, expected,
            "Expected header '{}' to be '{}', got '{}'",
            key, expected, actual
        );
        self
    }

    /// # Panics
    ///
    /// Panics if the header is present.
    pub fn assert_no_header(&self, key: &str) -> &Self {
        assert!(
            self.headers.get(key).is_none(),
            "Expected no '{}' header, got {:?}",
            key,
            self.headers.get(key)
        );
        self
    }

    /// Assert the body is exactly `{"message": message, "data": data}`.
    ///
    /// # Panics
    ///
    /// Panics if the body is not an envelope or differs.
    pub fn assert_envelope(&self, message: &str, data: &Value) -> &Self {
        let envelope = self.envelope();
        assert_eq!(envelope.message, message, "envelope message mismatch");
        assert_eq!(&envelope.data, data, "envelope data mismatch");
        self
    }

    /// Assert the raw body bytes.
    ///
    /// # Panics
    ///
    /// Panics if the body differs.
    pub fn assert_body(&self, expected: &str) -> &Self {
        assert_eq!(self.text(), expected, "body mismatch");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiStatus, Responder};
    use serde_json::json;

    #[tokio::test]
    async fn test_assertions_chain() {
        let response = Responder::default()
            .build(ApiStatus::BadRequest, Envelope::new("invalid", json!(["name"])))
            .unwrap();

        TestResponse::from_response(response)
            .await
            .assert_status(400)
            .assert_header("content-type", "application/json")
            .assert_no_header("allow")
            .assert_envelope("invalid", &json!(["name"]))
            .assert_body(r#"{"message":"invalid","data":["name"]}"#);
    }

    #[tokio::test]
    #[should_panic(expected = "Expected status")]
    async fn test_assert_status_mismatch_panics() {
        let response = Responder::default()
            .build(ApiStatus::Ok, Envelope::empty())
            .unwrap();
        TestResponse::from_response(response).await.assert_status(404);
    }
}
