//! Error types for jsonapi

use thiserror::Error;

/// Result type alias for envelope operations
pub type Result<T, E = EnvelopeError> = std::result::Result<T, E>;

/// Broad classification of an [`EnvelopeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something the envelope contract does not accept.
    CallerMisuse,
    /// The payload could not be represented as JSON.
    Serialization,
    /// The response channel could not be written.
    Transport,
}

/// Errors raised while building or emitting an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The status code is not in the whitelist.
    #[error("unsupported status code: {0}")]
    UnsupportedStatus(u16),

    /// `data` serialized to something other than an object or an array.
    #[error("envelope data must be a JSON object or array, got {0}")]
    InvalidData(&'static str),

    /// A caller-supplied header name or value is malformed.
    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// `data` could not be serialized.
    #[error("failed to serialize envelope: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport rejected a write.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl EnvelopeError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedStatus(_) | Self::InvalidData(_) | Self::InvalidHeader { .. } => {
                ErrorKind::CallerMisuse
            }
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// True when the error was caused by the caller rather than a collaborator.
    pub fn is_caller_misuse(&self) -> bool {
        self.kind() == ErrorKind::CallerMisuse
    }

    pub(crate) fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failures reported by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The response was already finalized for this request cycle.
    #[error("response already finalized")]
    AlreadyFinalized,

    /// The response was read before it was finalized.
    #[error("response not finalized")]
    NotFinalized,

    /// The underlying channel is gone.
    #[error("transport closed: {0}")]
    Closed(String),
}
