//! Error types for the protocol layer.
//!
//! Each crate in GameShelf defines its own error enum. When you see a
//! `ProtocolError`, you know the problem is turning values into bytes
//! or bytes into values, not reaching the server or the token store.

/// Errors that can occur in the protocol layer.
///
/// `#[derive(thiserror::Error)]` auto-generates the `std::error::Error`
/// implementation; each `#[error("...")]` is the message you see in logs.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust value into a request body).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning a response body into a Rust value).
    ///
    /// Common causes: the server changed a field type, a required field
    /// is missing, or the body isn't JSON at all (an HTML error page
    /// from a proxy, for instance).
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The body parsed, but breaks a protocol rule.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
