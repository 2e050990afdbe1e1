//! Wire protocol for GameShelf.
//!
//! This crate defines the "language" the client and the remote service
//! speak:
//!
//! - **Types** ([`Game`], [`CollectionEntry`], [`PlaySession`], etc.):
//!   the request and response bodies, with field names matching the
//!   service's JSON.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`], [`encode_form`]): how
//!   those values are converted to/from bytes.
//! - **Detail extraction** ([`extract_detail`]): pulling the
//!   human-readable message out of an error body.
//! - **Errors** ([`ProtocolError`]).
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the API
//! client (typed operations). It doesn't know about URLs, tokens or
//! sessions.
//!
//! ```text
//! Transport (bytes) → Protocol (typed bodies) → Client (operations)
//! ```

mod codec;
mod detail;
mod error;
mod types;

pub use codec::{Codec, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, JsonCodec, encode_form};
pub use detail::extract_detail;
pub use error::ProtocolError;
pub use types::{
    BggId, CollectionEntry, CollectionUpdate, EntryId, Game, GameId,
    GameSearchResult, NewCollectionEntry, NewPlaySession, NewWishlistEntry,
    Paging, PlayData, PlayId, PlaySession, PlaySessionWithGame,
    RegisterRequest, TokenResponse, UserId, UserProfile, UserStats,
    WishlistEntry, WishlistUpdate,
};
