//! Environment-driven configuration.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `GAMESHELF_API_BASE_URL` | where the service lives | `http://localhost:8000` |
//! | `GAMESHELF_TIMEOUT_SECS` | per-request timeout, `0` = none | `30` |
//! | `GAMESHELF_TOKEN_FILE` | session file | `<data dir>/gameshelf/session.json` |

use std::path::PathBuf;
use std::time::Duration;

use gameshelf_client::{ClientConfig, DEFAULT_BASE_URL};

use crate::GameshelfError;

pub const ENV_BASE_URL: &str = "GAMESHELF_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "GAMESHELF_TIMEOUT_SECS";
pub const ENV_TOKEN_FILE: &str = "GAMESHELF_TOKEN_FILE";

/// Everything needed to build a session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameshelfConfig {
    pub client: ClientConfig,

    /// Where the session token is persisted. `None` when neither the
    /// environment nor the platform names a data directory.
    pub token_file: Option<PathBuf>,
}

impl GameshelfConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, GameshelfError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, so tests don't touch the real
    /// environment.
    ///
    /// # Errors
    /// [`GameshelfError::Config`] for an unusable base URL or a timeout
    /// that isn't a whole number of seconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameshelfError> {
        let base_url = non_empty(lookup(ENV_BASE_URL)).unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut client = ClientConfig::new(&base_url)
            .map_err(|e| GameshelfError::Config(format!("{ENV_BASE_URL}: {e}")))?;

        if let Some(raw) = non_empty(lookup(ENV_TIMEOUT_SECS)) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GameshelfError::Config(format!("{ENV_TIMEOUT_SECS}: expected seconds, got {raw:?}"))
            })?;
            client = client.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }

        let token_file = non_empty(lookup(ENV_TOKEN_FILE))
            .map(PathBuf::from)
            .or_else(default_token_file);

        Ok(Self { client, token_file })
    }
}

impl Default for GameshelfConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            token_file: default_token_file(),
        }
    }
}

/// `<platform data dir>/gameshelf/session.json`, if the platform has one.
pub fn default_token_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("gameshelf").join("session.json"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_empty_env_uses_defaults() {
        let config = GameshelfConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.client, ClientConfig::default());
        assert_eq!(config.token_file, default_token_file());
    }

    #[test]
    fn test_from_lookup_reads_every_variable() {
        let config = GameshelfConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "https://shelf.example.com/api/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_TOKEN_FILE, "/tmp/shelf/session.json"),
        ]))
        .unwrap();
        assert_eq!(config.client.base_url.as_str(), "https://shelf.example.com/api/");
        assert_eq!(config.client.timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            config.token_file,
            Some(PathBuf::from("/tmp/shelf/session.json"))
        );
    }

    #[test]
    fn test_from_lookup_zero_timeout_disables_it() {
        let config = GameshelfConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap();
        assert_eq!(config.client.timeout, None);
    }

    #[test]
    fn test_from_lookup_bad_timeout_is_config_error() {
        let err = GameshelfConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, GameshelfError::Config(msg) if msg.contains(ENV_TIMEOUT_SECS)));
    }

    #[test]
    fn test_from_lookup_bad_url_is_config_error() {
        let err = GameshelfConfig::from_lookup(lookup(&[(ENV_BASE_URL, "localhost:8000 oops")]))
            .unwrap_err();
        assert!(matches!(err, GameshelfError::Config(_)));
    }

    #[test]
    fn test_from_lookup_blank_values_are_ignored() {
        let config = GameshelfConfig::from_lookup(lookup(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(config.client.base_url.as_str(), "http://localhost:8000/");
    }
}
