//! Game catalog endpoints.

use gameshelf_protocol::{BggId, Game, GameSearchResult};
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;

use crate::client::Call;
use crate::{ApiClient, ApiError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `GET /games/search-bgg?query=...`: search BoardGameGeek by title.
    pub async fn search_games(&self, query: &str) -> Result<Vec<GameSearchResult>, ApiError> {
        let mut url = self.url(&["games", "search-bgg"])?;
        url.query_pairs_mut().append_pair("query", query);
        self.fetch(Call::get(url)).await
    }

    /// `GET /games/{bgg_id}`: full details for one game.
    pub async fn game_details(&self, bgg_id: BggId) -> Result<Game, ApiError> {
        let id = bgg_id.to_string();
        let url = self.url(&["games", &id])?;
        self.fetch(Call::get(url)).await
    }

    /// `POST /games/barcode-lookup?barcode=...`: resolve a UPC/EAN.
    ///
    /// The response shape is owned by the service and passed through
    /// untouched.
    pub async fn barcode_lookup(&self, barcode: &str) -> Result<serde_json::Value, ApiError> {
        let mut url = self.url(&["games", "barcode-lookup"])?;
        url.query_pairs_mut().append_pair("barcode", barcode);
        self.fetch(Call::post(url)).await
    }

    /// `POST /games/barcode-associate?barcode=...&bgg_id=...`: teach the
    /// service which game a barcode belongs to.
    pub async fn associate_barcode(
        &self,
        barcode: &str,
        bgg_id: BggId,
    ) -> Result<serde_json::Value, ApiError> {
        let mut url = self.url(&["games", "barcode-associate"])?;
        url.query_pairs_mut()
            .append_pair("barcode", barcode)
            .append_pair("bgg_id", &bgg_id.to_string());
        self.fetch(Call::post(url)).await
    }
}
