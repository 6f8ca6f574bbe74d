//! # jsonapi
//!
//! Uniform JSON response envelopes for HTTP APIs.
//!
//! Every response body has the same shape, and the status travels on the
//! status line only:
//!
//! ```json
//! { "message": "Widget created", "data": { "id": 42 } }
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jsonapi_rs::prelude::*;
//!
//! let responder = Responder::default();
//!
//! // write into the request's transport
//! let mut transport = HttpTransport::new();
//! responder.created(&mut transport, Envelope::new("Widget created", json!({ "id": 42 })))?;
//!
//! // or return a value from a handler
//! fn show() -> Reply {
//!     Reply::not_found(Envelope::empty())
//! }
//! ```
//!
//! ## Named methods
//!
//! `ok`, `created`, `no_content`, `moved_permanently`, `moved_temporarily`,
//! `see_other`, `bad_request`, `unauthorized`, `forbidden`, `not_found`,
//! `method_not_allowed`, `conflict`, `internal_server_error`.
//!
//! ## Optional Features
//!
//! - `redirects` (default) - the 301/302/303 family
//! - `config` (default) - `EnvelopeConfig::from_env` and `.env` loading
//! - `test-utils` - `TestResponse` assertions
//!
//! ```toml
//! [dependencies]
//! jsonapi-rs = { version = "0.1", default-features = false, features = ["config"] }
//! ```

// Re-export core functionality
pub use jsonapi_core::*;

// HTTP types used in the public API
pub use http;

// Logging macros used by handlers and the prelude
pub use tracing;

pub mod logging;

/// Prelude module - import everything you need with `use jsonapi_rs::prelude::*`
pub mod prelude {
    pub use jsonapi_core::{
        ApiStatus, Envelope, EnvelopeConfig, EnvelopeError, HttpTransport, IntoResponse,
        NoContentPolicy, Reply, Responder, Response, Result, Transport,
    };

    #[cfg(feature = "config")]
    pub use jsonapi_core::load_dotenv;

    pub use serde::{Deserialize, Serialize};
    pub use serde_json::json;
    pub use tracing::{debug, error, info, trace, warn};
}
