//! Collection endpoints.

use gameshelf_protocol::{CollectionEntry, CollectionUpdate, EntryId, NewCollectionEntry};
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;

use crate::client::Call;
use crate::{ApiClient, ApiError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /games/collection/`.
    ///
    /// The service also drops the game from the wishlist if it was there,
    /// and answers 409 if it's already in the collection.
    pub async fn add_to_collection(
        &self,
        entry: &NewCollectionEntry,
    ) -> Result<CollectionEntry, ApiError> {
        let body = self.encode(entry)?;
        let url = self.url(&["games", "collection", ""])?;
        self.fetch(Call::post(url).body(body)).await
    }

    /// `GET /games/collection/`.
    pub async fn collection(&self) -> Result<Vec<CollectionEntry>, ApiError> {
        let url = self.url(&["games", "collection", ""])?;
        self.fetch(Call::get(url)).await
    }

    /// `PUT /games/collection/{id}` with only the fields set in `update`.
    pub async fn update_collection_entry(
        &self,
        id: EntryId,
        update: &CollectionUpdate,
    ) -> Result<CollectionEntry, ApiError> {
        tracing::debug!(%id, ?update, "updating collection entry");
        let body = self.encode(update)?;
        let id = id.to_string();
        let url = self.url(&["games", "collection", &id])?;
        self.fetch(Call::put(url).body(body)).await
    }

    /// `DELETE /games/collection/{id}`.
    pub async fn delete_collection_entry(&self, id: EntryId) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.url(&["games", "collection", &id])?;
        self.fetch_empty(Call::delete(url)).await
    }
}
