/// Errors that can occur in the transport layer.
///
/// Every variant means the same thing to callers: no HTTP response
/// was received. Status codes, including 4xx and 5xx, are not errors
/// at this layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The remote host could not be reached.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The transport gave up waiting for a response.
    #[error("request timed out")]
    Timeout,

    /// The request could not be built (bad URL, bad header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other I/O fault while sending or reading the body.
    #[error("i/o failed: {0}")]
    Io(String),
}
