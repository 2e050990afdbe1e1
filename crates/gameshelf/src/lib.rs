//! # GameShelf
//!
//! Client-side core for a board game collection tracker.
//!
//! GameShelf talks to a remote service that stores a user's collection,
//! wishlist and play history. This crate handles the parts every front end
//! needs: signing in, keeping the session token, and authorizing every
//! request with it.
//!
//! ## Layers
//!
//! | Crate | Role |
//! |---|---|
//! | `gameshelf-transport` | HTTP request/response types, reqwest transport |
//! | `gameshelf-protocol` | wire types, JSON and form codecs |
//! | `gameshelf-store` | token persistence (memory, JSON file) |
//! | `gameshelf-client` | [`ApiClient`]: one method per endpoint, bearer read-through |
//! | `gameshelf-session` | [`SessionController`]: login/logout state machine |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gameshelf::prelude::*;
//!
//! # async fn run() -> Result<(), GameshelfError> {
//! gameshelf::init_logging();
//!
//! let session = GameshelfBuilder::from_env()?.build()?;
//! session.bootstrap().await;
//!
//! if !session.snapshot().state.is_authenticated() {
//!     session.login("me@example.com", "hunter22").await?;
//! }
//! for entry in session.client().collection().await? {
//!     println!("{}", entry.game.title);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod error;
mod logging;

pub use builder::{EphemeralSession, GameshelfBuilder, Session};
pub use config::{ENV_BASE_URL, ENV_TIMEOUT_SECS, ENV_TOKEN_FILE, GameshelfConfig, default_token_file};
pub use error::GameshelfError;
pub use logging::{init_logging, init_logging_with};

pub use gameshelf_client::{ApiClient, ApiError, ClientConfig, DEFAULT_BASE_URL};
pub use gameshelf_session::{
    AccessToken, AuthSnapshot, LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE,
    SessionController, SessionError, SessionState,
};
pub use gameshelf_store::{FileStore, KeyValueStore, MemoryStore, StoreError, TOKEN_KEY, TokenStore};
pub use gameshelf_transport::{ReqwestTransport, Transport, TransportError};

/// Wire types, re-exported whole.
pub mod protocol {
    pub use gameshelf_protocol::*;
}

pub mod prelude {
    pub use crate::protocol::{
        BggId, CollectionEntry, CollectionUpdate, EntryId, Game, GameId, GameSearchResult,
        NewCollectionEntry, NewWishlistEntry, Paging, PlayData, PlaySession,
        PlaySessionWithGame, UserProfile, UserStats, WishlistEntry, WishlistUpdate,
    };
    pub use crate::{
        ApiClient, ApiError, AuthSnapshot, GameshelfBuilder, GameshelfConfig, GameshelfError,
        SessionController, SessionError, SessionState,
    };
}
