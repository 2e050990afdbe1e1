//! Wishlist endpoints.

use gameshelf_protocol::{EntryId, NewWishlistEntry, WishlistEntry, WishlistUpdate};
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;

use crate::client::Call;
use crate::{ApiClient, ApiError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /wishlists/`. 409 if the game is already wishlisted or owned.
    pub async fn add_to_wishlist(&self, entry: &NewWishlistEntry) -> Result<WishlistEntry, ApiError> {
        let body = self.encode(entry)?;
        let url = self.url(&["wishlists", ""])?;
        self.fetch(Call::post(url).body(body)).await
    }

    /// `GET /wishlists/`.
    pub async fn wishlist(&self) -> Result<Vec<WishlistEntry>, ApiError> {
        let url = self.url(&["wishlists", ""])?;
        self.fetch(Call::get(url)).await
    }

    /// `PUT /wishlists/{id}` with only the fields set in `update`.
    pub async fn update_wishlist_entry(
        &self,
        id: EntryId,
        update: &WishlistUpdate,
    ) -> Result<WishlistEntry, ApiError> {
        let body = self.encode(update)?;
        let id = id.to_string();
        let url = self.url(&["wishlists", &id])?;
        self.fetch(Call::put(url).body(body)).await
    }

    /// `DELETE /wishlists/{id}`.
    pub async fn delete_wishlist_entry(&self, id: EntryId) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.url(&["wishlists", &id])?;
        self.fetch_empty(Call::delete(url)).await
    }
}
