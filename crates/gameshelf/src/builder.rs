//! `GameshelfBuilder`: wires transport, store, client and controller.
//!
//! This is the entry point for applications. It ties together all the
//! layers: transport → client → session, with the token store shared
//! between the client (reads) and the controller (writes).

use std::path::PathBuf;
use std::time::Duration;

use gameshelf_client::{ApiClient, ClientConfig};
use gameshelf_session::SessionController;
use gameshelf_store::{FileStore, KeyValueStore, MemoryStore, TokenStore};
use gameshelf_transport::ReqwestTransport;

use crate::{GameshelfConfig, GameshelfError};

/// A controller backed by reqwest and a session file.
pub type Session = SessionController<ReqwestTransport, FileStore>;

/// A controller backed by reqwest that forgets its token on exit.
pub type EphemeralSession = SessionController<ReqwestTransport, MemoryStore>;

/// Builder for a ready-to-bootstrap [`SessionController`].
///
/// # Example
///
/// ```rust,no_run
/// use gameshelf::prelude::*;
///
/// # async fn run() -> Result<(), GameshelfError> {
/// let session = GameshelfBuilder::from_env()?.build()?;
/// session.bootstrap().await;
/// if session.snapshot().state.is_authenticated() {
///     let shelf = session.client().collection().await?;
///     println!("{} games", shelf.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameshelfBuilder {
    config: GameshelfConfig,
    base_url: Option<String>,
}

impl GameshelfBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from `GAMESHELF_*` environment variables.
    pub fn from_env() -> Result<Self, GameshelfError> {
        Ok(Self::with_config(GameshelfConfig::from_env()?))
    }

    /// Creates a builder from an existing configuration.
    pub fn with_config(config: GameshelfConfig) -> Self {
        Self {
            config,
            base_url: None,
        }
    }

    /// Sets the service base URL. Validated by the `build*` methods.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout. `None` waits forever.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.client.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.client.user_agent = user_agent.into();
        self
    }

    /// Sets where the session token is persisted.
    pub fn token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.token_file = Some(path.into());
        self
    }

    /// Builds a controller whose token survives restarts.
    ///
    /// # Errors
    /// [`GameshelfError::Config`] if no token file is configured and the
    /// platform has no data directory, or if the base URL is unusable.
    pub fn build(self) -> Result<Session, GameshelfError> {
        let path = self.config.token_file.clone().ok_or_else(|| {
            GameshelfError::Config(
                "no data directory found; set GAMESHELF_TOKEN_FILE".to_string(),
            )
        })?;
        tracing::debug!(path = %path.display(), "using session file");
        self.build_with_store(FileStore::new(path))
    }

    /// Builds a controller that keeps its token in memory only.
    pub fn build_ephemeral(self) -> Result<EphemeralSession, GameshelfError> {
        self.build_with_store(MemoryStore::new())
    }

    /// Builds a controller over any store.
    pub fn build_with_store<S: KeyValueStore>(
        self,
        store: S,
    ) -> Result<SessionController<ReqwestTransport, S>, GameshelfError> {
        let client_config = self.client_config()?;
        let transport = ReqwestTransport::new(client_config.timeout, &client_config.user_agent)?;

        tracing::info!(base_url = %client_config.base_url, "gameshelf client ready");

        let client = ApiClient::new(transport, TokenStore::new(store), client_config)?;
        Ok(SessionController::new(client))
    }

    fn client_config(&self) -> Result<ClientConfig, GameshelfError> {
        let mut config = self.config.client.clone();
        if let Some(url) = &self.base_url {
            let parsed = ClientConfig::new(url)
                .map_err(|e| GameshelfError::Config(format!("base url: {e}")))?;
            config.base_url = parsed.base_url;
        }
        Ok(config)
    }
}
