//! Public profile endpoints. These never carry credentials.

use gameshelf_protocol::{CollectionEntry, WishlistEntry};
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;

use crate::client::Call;
use crate::{ApiClient, ApiError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `GET /public/collections/{username}`.
    pub async fn public_collection(&self, username: &str) -> Result<Vec<CollectionEntry>, ApiError> {
        let url = self.url(&["public", "collections", username])?;
        self.fetch(Call::get(url).public()).await
    }

    /// `GET /public/wishlists/{username}`.
    pub async fn public_wishlist(&self, username: &str) -> Result<Vec<WishlistEntry>, ApiError> {
        let url = self.url(&["public", "wishlists", username])?;
        self.fetch(Call::get(url).public()).await
    }
}
