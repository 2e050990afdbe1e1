//! Wire types for the GameShelf remote service.
//!
//! This module defines every type that travels "on the wire": request
//! bodies the client serializes and response bodies it deserializes.
//! Field names match the service's JSON exactly, so most structs need no
//! `#[serde(rename)]` at all.
//!
//! Optional fields use `Option<T>` plus `#[serde(default)]` where the
//! service may leave them out entirely, so a server adding or dropping a
//! nullable column doesn't break decoding.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

// Newtype wrappers: each wraps a plain integer so a collection entry id
// can't be passed where a BoardGameGeek id is expected, even though both
// are `i64` underneath. `#[serde(transparent)]` keeps them plain numbers
// in JSON. `Display` prints the bare number because ids are also used as
// URL path segments.

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_type!(
    /// The service's primary key for a user.
    UserId
);
id_type!(
    /// The service's own primary key for a cached game ("internal game id").
    GameId
);
id_type!(
    /// A BoardGameGeek id ("external id").
    BggId
);
id_type!(
    /// A collection or wishlist entry id.
    EntryId
);
id_type!(
    /// A logged play session id.
    PlayId
);

// ---------------------------------------------------------------------------
// Users and authentication
// ---------------------------------------------------------------------------

/// Body of `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /users/token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// The signed-in user, as returned by `GET /users/me` and by register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Response of `GET /users/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub collection_count: u64,
    pub wishlist_count: u64,
    pub plays_count: u64,
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// One hit from `GET /games/search-bgg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSearchResult {
    pub bgg_id: BggId,
    pub title: String,
    #[serde(default)]
    pub year_published: Option<i32>,
}

/// Full game details.
///
/// `id` is only present once the service has cached the game locally;
/// a fresh detail lookup by BGG id may come back without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: Option<GameId>,
    pub bgg_id: BggId,
    pub title: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub year_published: Option<i32>,
    #[serde(default)]
    pub min_players: Option<u32>,
    #[serde(default)]
    pub max_players: Option<u32>,
    #[serde(default)]
    pub playing_time_min: Option<u32>,
    #[serde(default)]
    pub playing_time_max: Option<u32>,
    #[serde(default)]
    pub recommended_age: Option<u32>,
    #[serde(default)]
    pub box_art_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Kept as text: BGG reports non-numeric ratings for unrated games.
    #[serde(default)]
    pub bgg_rating: Option<String>,
    #[serde(default)]
    pub bgg_num_voters: Option<u32>,
    #[serde(default)]
    pub bgg_link: Option<String>,
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// An owned game in the user's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub game_id: GameId,
    #[serde(default)]
    pub personal_notes: Option<String>,
    /// Comma-separated tags; see [`tags`](Self::tags).
    #[serde(default)]
    pub custom_tags: Option<String>,
    #[serde(default)]
    pub times_played: Option<u32>,
    #[serde(default)]
    pub for_sale_trade: Option<bool>,
    #[serde(default)]
    pub sale_trade_notes: Option<String>,
    pub game: Game,
}

impl CollectionEntry {
    /// Splits `custom_tags` on commas, trimming blanks.
    pub fn tags(&self) -> Vec<&str> {
        self.custom_tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `true` if the owner has flagged this copy for sale or trade.
    pub fn is_for_sale(&self) -> bool {
        self.for_sale_trade.unwrap_or(false)
    }
}

/// Body of `POST /games/collection/`.
///
/// Note that `game_id` here is a **BGG id**: the service looks the game
/// up (and caches it) before creating the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCollectionEntry {
    pub game_id: BggId,
    pub personal_notes: Option<String>,
    pub custom_tags: Option<String>,
}

/// Partial body of `PUT /games/collection/{id}`.
///
/// Only `Some` fields are sent; the service leaves the rest untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_sale_trade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_trade_notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Wishlist
// ---------------------------------------------------------------------------

/// A game on the user's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub game_id: GameId,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub game: Game,
}

/// Body of `POST /wishlists/`. `game_id` is a BGG id, as for collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWishlistEntry {
    pub game_id: BggId,
    pub priority: Option<i32>,
    pub notes: Option<String>,
}

/// Partial body of `PUT /wishlists/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WishlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Play sessions
// ---------------------------------------------------------------------------

/// The user-supplied part of a play log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayData {
    /// ISO date (`YYYY-MM-DD`); the service uses today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<String>,
}

/// Body of `POST /plays/`: `{ bgg_id, ...playData }`.
///
/// `#[serde(flatten)]` inlines the `PlayData` fields into the same JSON
/// object instead of nesting them under a `play` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPlaySession {
    pub bgg_id: BggId,
    #[serde(flatten)]
    pub play: PlayData,
}

/// A logged play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySession {
    pub id: PlayId,
    pub owner_id: UserId,
    pub game_id: GameId,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub game_state_notes: Option<String>,
    #[serde(default)]
    pub players: Option<String>,
}

/// A logged play with its game embedded, as returned by `GET /plays/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySessionWithGame {
    #[serde(flatten)]
    pub session: PlaySession,
    pub game: Game,
}

/// Optional paging for `GET /plays/`. The service defaults to
/// `skip=0, limit=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}
