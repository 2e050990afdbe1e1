//! Codecs for request and response bodies.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The remote service speaks JSON everywhere except one endpoint: the
//! token endpoint expects `application/x-www-form-urlencoded` credentials
//! (an OAuth2 password-flow requirement), so form encoding gets its own
//! small helper instead of a full codec.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// `Content-Type` for JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `Content-Type` for form-encoded bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// ## Trait bounds explained
///
/// - `Send + Sync` → safe to share between tasks on Tokio's thread pool.
/// - `'static` → the codec owns everything it needs, so it can live
///   inside a long-lived client.
///
/// `DeserializeOwned` (vs plain `Deserialize`) means the decoded value
/// doesn't borrow from the response buffer, which we drop right after.
pub trait Codec: Send + Sync + 'static {
    /// The `Content-Type` header value for bodies this codec produces.
    fn content_type(&self) -> &'static str;

    /// Serializes a value into a request body.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes a response body.
    ///
    /// # Errors
    /// Returns `ProtocolError::InvalidMessage` for an empty body and
    /// `ProtocolError::Decode` if the bytes don't match `T`.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// ## Example
///
/// ```rust
/// use gameshelf_protocol::{Codec, JsonCodec, UserStats};
///
/// let codec = JsonCodec;
/// let stats: UserStats = codec
///     .decode(br#"{"collection_count":3,"wishlist_count":1,"plays_count":9}"#)
///     .unwrap();
/// assert_eq!(stats.plays_count, 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        // An empty body is a server contract violation for endpoints that
        // promise a value; say so plainly rather than surfacing serde's
        // "EOF while parsing" message.
        if data.iter().all(u8::is_ascii_whitespace) {
            return Err(ProtocolError::InvalidMessage(
                "expected a JSON body, got an empty response".into(),
            ));
        }
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

// ---------------------------------------------------------------------------
// Form encoding
// ---------------------------------------------------------------------------

/// Encodes name/value pairs as an `application/x-www-form-urlencoded` body.
///
/// Order is preserved and values are percent-encoded, so a password like
/// `p&ss=word` can't smuggle in an extra field.
///
/// ```rust
/// use gameshelf_protocol::encode_form;
///
/// let body = encode_form(&[("username", "u@x.com"), ("password", "a b")]);
/// assert_eq!(body, b"username=u%40x.com&password=a+b");
/// ```
pub fn encode_form(fields: &[(&str, &str)]) -> Vec<u8> {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
        .into_bytes()
}
