//! Authentication session management for GameShelf.
//!
//! This crate owns the answer to "is the user signed in?":
//!
//! 1. **State**: [`SessionState`] (unknown, authenticated, unauthenticated)
//!    plus a `loading` flag, published together as an [`AuthSnapshot`]
//! 2. **Transitions**: bootstrap, login, register, logout on the
//!    [`SessionController`]
//! 3. **Messages**: turning server refusals into something a person can
//!    read ([`SessionError`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Application (above)  ← renders snapshots, calls login/logout
//!     ↕
//! Session Layer (this crate)  ← state machine, token lifecycle
//!     ↕
//! API Client + Token Store (below)  ← requests, bearer injection, storage
//! ```

mod auth;
mod controller;
mod error;
mod state;

pub use auth::{LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE};
pub use controller::SessionController;
pub use error::SessionError;
pub use state::{AccessToken, AuthSnapshot, SessionState};
