//! Error type for API calls.

use gameshelf_protocol::{ProtocolError, extract_detail};
use gameshelf_transport::{HttpResponse, TransportError};

/// Why an API call didn't produce a value.
///
/// The client doesn't interpret failures beyond sorting them into these
/// buckets: turning one into a sentence for a human is the session
/// controller's (or the caller's) job.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response at all: DNS, refused connection, timeout.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    ///
    /// `detail` is the server's `{"detail": ...}` message when there is
    /// one; `body` is the raw response text either way.
    #[error("server responded {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: u16,
        detail: Option<String>,
        body: String,
    },

    /// A request body couldn't be encoded, or a 2xx body couldn't be
    /// decoded into the expected type.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The configured base URL can't have paths appended to it.
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub(crate) fn from_response(response: HttpResponse) -> Self {
        Self::Status {
            status: response.status,
            detail: extract_detail(&response.body),
            body: response.text(),
        }
    }

    /// The HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's `detail` message, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// `true` for 401: the token is missing, expired or revoked.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// `true` for any 4xx.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// `true` for any 5xx.
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}
