//! Turning API failures into messages a person can read.
//!
//! The service explains most refusals in a `detail` field ("Incorrect
//! username or password", "Email already registered", a list of
//! validation problems). When it does, that's what the user sees.
//! When it doesn't (timeouts, 500s, garbage bodies), a fixed message per
//! operation stands in.

use gameshelf_client::ApiError;

/// Shown when a login fails without a server explanation.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Shown when a registration fails without a server explanation.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// The server's `detail` for `err`, or `fallback`.
pub(crate) fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.detail()
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
