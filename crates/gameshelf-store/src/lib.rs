//! Durable storage for GameShelf sessions.
//!
//! This crate provides:
//!
//! 1. **Backends**: the [`KeyValueStore`] trait with an in-memory
//!    ([`MemoryStore`]) and a JSON file ([`FileStore`]) implementation.
//! 2. **The token store**: [`TokenStore`], a best-effort wrapper that
//!    never lets a storage fault escape as an error.
//!
//! # How it fits in the stack
//!
//! ```text
//! Session Controller  ← writes the token on login, clears it on logout
//!     ↕
//! API Client          ← reads the token before every request
//!     ↕
//! Token Store (this crate)
//! ```

mod backend;
mod error;
mod file;
mod token;

pub use backend::{KeyValueStore, MemoryStore};
pub use error::StoreError;
pub use file::FileStore;
pub use token::{TOKEN_KEY, TokenStore};
