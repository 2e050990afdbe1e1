//! Unified error type for GameShelf.

use gameshelf_client::ApiError;
use gameshelf_protocol::ProtocolError;
use gameshelf_session::SessionError;
use gameshelf_store::StoreError;
use gameshelf_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `gameshelf` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum GameshelfError {
    /// No response from the service (connect, timeout, I/O).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A body couldn't be encoded or decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Local storage failed outside the token store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An API call failed (non-2xx, transport, decode).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Login or registration didn't end in a session.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The environment or builder settings don't make sense.
    #[error("configuration error: {0}")]
    Config(String),
}
