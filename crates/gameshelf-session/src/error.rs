//! Error types for the session layer.

/// Why a login or registration didn't end in an authenticated session.
///
/// Both variants carry the message a user should see. It's the same
/// string the controller publishes in
/// [`SessionState::Unauthenticated`](crate::SessionState::Unauthenticated),
/// so callers can show either one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The credentials were rejected, the service was unreachable, or the
    /// profile couldn't be fetched with the new token.
    #[error("{0}")]
    LoginFailed(String),

    /// The service refused to create the account (duplicate email,
    /// validation error, outage).
    #[error("{0}")]
    RegistrationFailed(String),
}

impl SessionError {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::LoginFailed(message) | Self::RegistrationFailed(message) => message,
        }
    }
}
