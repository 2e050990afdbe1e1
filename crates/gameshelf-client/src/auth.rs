//! Account endpoints: register, login, profile and stats.

use gameshelf_protocol::{RegisterRequest, TokenResponse, UserProfile, UserStats, encode_form};
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;

use crate::client::Call;
use crate::{ApiClient, ApiError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /users/register` with `{email, password}`.
    ///
    /// Unauthenticated. A duplicate email comes back as a 400 with a
    /// `detail` message.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let body = self.encode(&RegisterRequest { email, password })?;
        let url = self.url(&["users", "register"])?;
        self.fetch(Call::post(url).body(body).public()).await
    }

    /// `POST /users/token` with form-encoded `username` / `password`.
    ///
    /// The service's token endpoint only accepts
    /// `application/x-www-form-urlencoded`. Unauthenticated. This does
    /// **not** store the returned token; the session controller does.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = encode_form(&[("username", username), ("password", password)]);
        let url = self.url(&["users", "token"])?;
        self.fetch(Call::post(url).form(body).public()).await
    }

    /// `GET /users/me` with the stored token.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let url = self.url(&["users", "me"])?;
        self.fetch(Call::get(url)).await
    }

    /// `GET /users/me` with an explicit token instead of the stored one.
    ///
    /// Used right after login, so the profile fetch doesn't depend on the
    /// token write having reached the store.
    pub async fn me_with_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.url(&["users", "me"])?;
        self.fetch(Call::get(url).with_token(token)).await
    }

    /// `GET /users/stats`: collection, wishlist and play counts.
    pub async fn stats(&self) -> Result<UserStats, ApiError> {
        let url = self.url(&["users", "stats"])?;
        self.fetch(Call::get(url)).await
    }
}
