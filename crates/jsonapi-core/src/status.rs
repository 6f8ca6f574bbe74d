//! The status whitelist
//!
//! Every status an envelope can be emitted with is listed exactly once in the
//! table at the bottom of this module. The `api_statuses!` macro expands that
//! table into:
//!
//! - the [`ApiStatus`] enum and its numeric/reason lookups,
//! - one named method per row on [`Responder`](crate::Responder),
//! - one named constructor per row on [`Reply`](crate::Reply).
//!
//! | Method | Code | Meaning |
//! |--------|------|---------|
//! | `ok` | 200 | generic success |
//! | `created` | 201 | resource created, caller sets `Location` |
//! | `no_content` | 204 | success with nothing to report |
//! | `moved_permanently` | 301 | redirect (`redirects` feature) |
//! | `moved_temporarily` | 302 | redirect (`redirects` feature) |
//! | `see_other` | 303 | result of a POST lives elsewhere (`redirects` feature) |
//! | `bad_request` | 400 | invalid request state |
//! | `unauthorized` | 401 | missing or invalid credentials |
//! | `forbidden` | 403 | not permitted, or intentionally masked |
//! | `not_found` | 404 | absent, or a masked 401/403 |
//! | `method_not_allowed` | 405 | caller sets `Allow` |
//! | `conflict` | 409 | duplicate or disallowed cascade |
//! | `internal_server_error` | 500 | unhandled faults only |

use crate::envelope::Envelope;
use crate::error::{EnvelopeError, Result};
use crate::reply::Reply;
use crate::responder::Responder;
use crate::transport::Transport;
use http::{Method, StatusCode};
use serde::Serialize;
use std::fmt;

macro_rules! api_statuses {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident = $code:literal, $reason:literal => $method:ident
            $([feature = $feature:literal])?;
        )+
    ) => {
        /// A whitelisted HTTP status an envelope can be emitted with.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ApiStatus {
            $(
                $(#[$doc])*
                $variant,
            )+
        }

        impl ApiStatus {
            /// Every row of the table, including rows disabled by features.
            pub const ALL: &'static [ApiStatus] = &[$(ApiStatus::$variant),+];

            /// Numeric status code
            pub const fn code(self) -> u16 {
                match self {
                    $(ApiStatus::$variant => $code,)+
                }
            }

            /// Canonical reason phrase
            pub const fn reason(self) -> &'static str {
                match self {
                    $(ApiStatus::$variant => $reason,)+
                }
            }

            /// Name of the named method that emits this status.
            pub const fn method_name(self) -> &'static str {
                match self {
                    $(ApiStatus::$variant => stringify!($method),)+
                }
            }

            fn lookup(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(ApiStatus::$variant),)+
                    _ => None,
                }
            }
        }

        impl Responder {
            $(
                $(#[$doc])*
                $(#[cfg(feature = $feature)])?
                pub fn $method<Tr, T>(
                    &self,
                    transport: &mut Tr,
                    envelope: Envelope<T>,
                ) -> Result<()>
                where
                    Tr: Transport + ?Sized,
                    T: Serialize,
                {
                    self.respond(transport, ApiStatus::$variant, envelope)
                }
            )+
        }

        impl<T> Reply<T> {
            $(
                $(#[$doc])*
                $(#[cfg(feature = $feature)])?
                pub fn $method(envelope: Envelope<T>) -> Self {
                    Reply::new(ApiStatus::$variant, envelope)
                }
            )+
        }
    };
}

api_statuses! {
    /// 200 OK. The general success status.
    Ok = 200, "OK" => ok;

    /// 201 Created. A resource was created by POST or PUT.
    ///
    /// The new resource should be named in a `Location` header. The caller
    /// sets it; nothing is added automatically.
    Created = 201, "Created" => created;

    /// 204 No Content. Success with nothing to report, typical for DELETE and PUT.
    ///
    /// Whether a body is written depends on
    /// [`NoContentPolicy`](crate::NoContentPolicy).
    NoContent = 204, "No Content" => no_content;

    /// 301 Moved Permanently.
    ///
    /// Only the envelope is built. Clients must not follow the redirect
    /// automatically unless the original method was GET or HEAD; see
    /// [`automatic_redirect_allowed`].
    MovedPermanently = 301, "Moved Permanently" => moved_permanently [feature = "redirects"];

    /// 302 Moved Temporarily.
    ///
    /// Same redirect caveats as [`ApiStatus::MovedPermanently`].
    MovedTemporarily = 302, "Moved Temporarily" => moved_temporarily [feature = "redirects"];

    /// 303 See Other. The result of a POST can be fetched with GET elsewhere.
    ///
    /// By convention `data` carries a link to that resource.
    SeeOther = 303, "See Other" => see_other [feature = "redirects"];

    /// 400 Bad Request. Fulfilling the request would produce an invalid state,
    /// e.g. validation failures or missing fields.
    BadRequest = 400, "Bad Request" => bad_request;

    /// 401 Unauthorized. Authentication is missing or invalid.
    Unauthorized = 401, "Unauthorized" => unauthorized;

    /// 403 Forbidden. Authenticated but not allowed, or the resource is
    /// deliberately unavailable.
    Forbidden = 403, "Forbidden" => forbidden;

    /// 404 Not Found. The resource does not exist, or a 401/403 is masked.
    NotFound = 404, "Not Found" => not_found;

    /// 405 Method Not Allowed. The route exists but not for this method.
    ///
    /// An `Allow` header listing the supported methods should be set by the
    /// caller. It is not populated automatically.
    MethodNotAllowed = 405, "Method Not Allowed" => method_not_allowed;

    /// 409 Conflict. Fulfilling the request would conflict with existing state,
    /// e.g. a duplicate entry or an unsupported cascading delete.
    Conflict = 409, "Conflict" => conflict;

    /// 500 Internal Server Error. Only for unhandled faults, never for an
    /// expected failure branch. Every use is logged at error level.
    InternalServerError = 500, "Internal Server Error" => internal_server_error;
}

impl ApiStatus {
    /// The status as an [`http::StatusCode`].
    pub fn as_status_code(self) -> StatusCode {
        // every row in the table is a valid 3-digit code
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Whether this row is available in the current build.
    pub const fn is_enabled(self) -> bool {
        !self.is_redirect() || cfg!(feature = "redirects")
    }

    /// Rows available in the current build.
    pub fn enabled() -> impl Iterator<Item = ApiStatus> {
        Self::ALL.iter().copied().filter(|status| status.is_enabled())
    }

    /// 2xx
    pub const fn is_success(self) -> bool {
        matches!(self.code(), 200..=299)
    }

    /// 3xx
    pub const fn is_redirect(self) -> bool {
        matches!(self.code(), 300..=399)
    }

    /// 4xx
    pub const fn is_client_error(self) -> bool {
        matches!(self.code(), 400..=499)
    }

    /// 5xx
    pub const fn is_server_error(self) -> bool {
        matches!(self.code(), 500..=599)
    }
}

impl TryFrom<u16> for ApiStatus {
    type Error = EnvelopeError;

    fn try_from(code: u16) -> Result<Self> {
        match Self::lookup(code) {
            Some(status) if status.is_enabled() => Ok(status),
            _ => Err(EnvelopeError::UnsupportedStatus(code)),
        }
    }
}

impl TryFrom<StatusCode> for ApiStatus {
    type Error = EnvelopeError;

    fn try_from(status: StatusCode) -> Result<Self> {
        Self::try_from(status.as_u16())
    }
}

impl From<ApiStatus> for StatusCode {
    fn from(status: ApiStatus) -> Self {
        status.as_status_code()
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// Whether a client may follow a redirect automatically.
///
/// Only GET and HEAD requests may be redirected without user confirmation.
/// The envelope builder never decides this; it is exposed for the calling
/// layer that owns the redirect policy.
pub fn automatic_redirect_allowed(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}
