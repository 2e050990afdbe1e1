//! Session state: what the controller publishes to observers.
//!
//! ```text
//!            bootstrap (token ok) / login ok
//!   Unknown ────────────────────────────────→ Authenticated
//!      │                                          │
//!      │ bootstrap (no token / bad token)         │ logout
//!      ▼                                          ▼
//!   Unauthenticated { error } ←───────────────────┘
//!      ↑        │
//!      └────────┘ login / register failed (error = Some(message))
//! ```
//!
//! The `loading` flag in [`AuthSnapshot`] is orthogonal to the state: it
//! says a transition is in flight, not where it will land.

use std::fmt;

use gameshelf_protocol::UserProfile;

// ---------------------------------------------------------------------------
// AccessToken
// ---------------------------------------------------------------------------

/// An opaque bearer token.
///
/// `Debug` never prints the value, so a snapshot can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Where the user stands with the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing decided yet: bootstrap hasn't finished.
    /// UI should show a loading indicator, not a login screen.
    Unknown,

    /// Signed in. `token` is the one every request is authorized with.
    Authenticated {
        token: AccessToken,
        profile: UserProfile,
    },

    /// Signed out. `error` is the message from the last failed login or
    /// registration, if any.
    Unauthenticated { error: Option<String> },
}

impl SessionState {
    /// Signed out with no error to show.
    pub fn signed_out() -> Self {
        Self::Unauthenticated { error: None }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated { error } => error.as_deref(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AuthSnapshot
// ---------------------------------------------------------------------------

/// One consistent view of the session, as handed to observers.
///
/// Token, profile and error always change together: observers get a
/// whole new snapshot or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub state: SessionState,
    pub loading: bool,
}

impl AuthSnapshot {
    pub(crate) fn settled(state: SessionState) -> Self {
        Self {
            state,
            loading: false,
        }
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::settled(SessionState::Unknown)
    }
}
