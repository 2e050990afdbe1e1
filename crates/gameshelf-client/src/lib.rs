//! Session-authenticated HTTP client for the GameShelf service.
//!
//! [`ApiClient`] is the single point of contact with the remote service.
//! It exposes one async method per remote operation, grouped by resource:
//!
//! | Resource | Methods |
//! |---|---|
//! | account | [`register`](ApiClient::register), [`login`](ApiClient::login), [`me`](ApiClient::me), [`stats`](ApiClient::stats) |
//! | catalog | [`search_games`](ApiClient::search_games), [`game_details`](ApiClient::game_details), [`barcode_lookup`](ApiClient::barcode_lookup), [`associate_barcode`](ApiClient::associate_barcode) |
//! | collection | [`add_to_collection`](ApiClient::add_to_collection), [`collection`](ApiClient::collection), [`update_collection_entry`](ApiClient::update_collection_entry), [`delete_collection_entry`](ApiClient::delete_collection_entry) |
//! | wishlist | [`add_to_wishlist`](ApiClient::add_to_wishlist), [`wishlist`](ApiClient::wishlist), [`update_wishlist_entry`](ApiClient::update_wishlist_entry), [`delete_wishlist_entry`](ApiClient::delete_wishlist_entry) |
//! | plays | [`log_play`](ApiClient::log_play), [`plays_for_game`](ApiClient::plays_for_game), [`plays`](ApiClient::plays) |
//! | public | [`public_collection`](ApiClient::public_collection), [`public_wishlist`](ApiClient::public_wishlist) |
//!
//! Before every request the client reads the current token from its
//! [`TokenStore`](gameshelf_store::TokenStore) and, if there is one,
//! sends `Authorization: Bearer <token>`.

mod auth;
mod client;
mod collection;
mod config;
mod error;
mod games;
mod plays;
mod public;
mod wishlist;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
