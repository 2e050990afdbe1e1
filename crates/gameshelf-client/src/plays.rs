//! Play-session endpoints.

use gameshelf_protocol::{
    BggId, GameId, NewPlaySession, Paging, PlayData, PlaySession, PlaySessionWithGame,
};
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;

use crate::client::Call;
use crate::{ApiClient, ApiError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /plays/` with `{bgg_id, ...play}`.
    ///
    /// Takes the **BGG** id; the service bumps `times_played` on the
    /// matching collection entry if there is one.
    pub async fn log_play(&self, bgg_id: BggId, play: PlayData) -> Result<PlaySession, ApiError> {
        let body = self.encode(&NewPlaySession { bgg_id, play })?;
        let url = self.url(&["plays", ""])?;
        self.fetch(Call::post(url).body(body)).await
    }

    /// `GET /plays/{game_id}`.
    ///
    /// Takes the service's **internal** game id (`CollectionEntry::game_id`),
    /// not the BGG id.
    pub async fn plays_for_game(&self, game_id: GameId) -> Result<Vec<PlaySession>, ApiError> {
        let id = game_id.to_string();
        let url = self.url(&["plays", &id])?;
        self.fetch(Call::get(url)).await
    }

    /// `GET /plays/`: every play the user logged, each with its game.
    pub async fn plays(&self, paging: Paging) -> Result<Vec<PlaySessionWithGame>, ApiError> {
        let mut url = self.url(&["plays", ""])?;
        if paging.skip.is_some() || paging.limit.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(skip) = paging.skip {
                query.append_pair("skip", &skip.to_string());
            }
            if let Some(limit) = paging.limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        self.fetch(Call::get(url)).await
    }
}
