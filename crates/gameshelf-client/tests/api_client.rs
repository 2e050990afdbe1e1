//! End-to-end tests for the API client against a mock HTTP server.

use gameshelf_client::{ApiClient, ApiError, ClientConfig};
use gameshelf_protocol::{
    BggId, CollectionUpdate, EntryId, GameId, NewCollectionEntry, NewWishlistEntry, Paging,
    PlayData,
};
use gameshelf_store::{MemoryStore, TokenStore};
use gameshelf_transport::{ReqwestTransport, TransportError};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Client = ApiClient<ReqwestTransport, MemoryStore>;

fn client(base: &str) -> Client {
    let config = ClientConfig::new(base).unwrap();
    let transport = ReqwestTransport::new(config.timeout, &config.user_agent).unwrap();
    ApiClient::new(transport, TokenStore::new(MemoryStore::new()), config).unwrap()
}

fn game(bgg_id: i64, title: &str) -> serde_json::Value {
    json!({ "id": 7, "bgg_id": bgg_id, "title": title })
}

fn collection_entry(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": 1,
        "game_id": 7,
        "custom_tags": "coop, heavy",
        "times_played": 3,
        "game": game(174430, "Gloomhaven"),
    })
}

#[tokio::test]
async fn test_authenticated_call_carries_stored_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "email": "u@x.com"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let c = client(&server.uri());
    c.token_store().save_token("abc123").await;

    let me = c.me().await.unwrap();
    assert_eq!(me.email, "u@x.com");
    assert!(me.is_active);
}

#[tokio::test]
async fn test_login_posts_form_without_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("username=u%40x.com&password=p+w%26d"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok1", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let c = client(&server.uri());
    c.token_store().save_token("stale").await;

    let token = c.login("u@x.com", "p w&d").await.unwrap();
    assert_eq!(token.access_token, "tok1");

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
    // login doesn't persist anything on its own
    assert_eq!(c.token_store().token().await.as_deref(), Some("stale"));
}

#[tokio::test]
async fn test_register_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .and(body_json(json!({"email": "new@x.com", "password": "hunter22"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 5, "email": "new@x.com", "is_active": true})),
        )
        .mount(&server)
        .await;

    let profile = client(&server.uri())
        .register("new@x.com", "hunter22")
        .await
        .unwrap();
    assert_eq!(profile.id.0, 5);
}

#[tokio::test]
async fn test_duplicate_registration_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email already registered"})),
        )
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .register("u@x.com", "pw")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("Email already registered"));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_validation_errors_are_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
                {"loc": ["body", "password"], "msg": "field required", "type": "missing"}
            ]
        })))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .register("nope", "")
        .await
        .unwrap_err();
    assert_eq!(
        err.detail(),
        Some("value is not a valid email address; field required")
    );
}

#[tokio::test]
async fn test_unauthorized_is_reported_as_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/stats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
        )
        .mount(&server)
        .await;

    let err = client(&server.uri()).stats().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_public_endpoints_never_send_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/collections/meeple_fan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([collection_entry(1)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public/wishlists/meeple_fan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let c = client(&server.uri());
    c.token_store().save_token("secret").await;

    let shelf = c.public_collection("meeple_fan").await.unwrap();
    assert_eq!(shelf.len(), 1);
    assert_eq!(shelf[0].tags(), vec!["coop", "heavy"]);
    assert!(c.public_wishlist("meeple_fan").await.unwrap().is_empty());

    for request in server.received_requests().await.unwrap() {
        assert!(!request.headers.contains_key("authorization"));
    }
}

#[tokio::test]
async fn test_search_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games/search-bgg"))
        .and(query_param("query", "ticket to ride & more"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"bgg_id": 9209, "title": "Ticket to Ride", "year_published": 2004}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client(&server.uri())
        .search_games("ticket to ride & more")
        .await
        .unwrap();
    assert_eq!(results[0].bgg_id, BggId(9209));
}

#[tokio::test]
async fn test_barcode_endpoints_pass_json_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/games/barcode-lookup"))
        .and(query_param("barcode", "0123456789012"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"found": true, "bgg_id": 13})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/games/barcode-associate"))
        .and(query_param("barcode", "0123456789012"))
        .and(query_param("bgg_id", "13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let c = client(&server.uri());
    let found = c.barcode_lookup("0123456789012").await.unwrap();
    assert_eq!(found["bgg_id"], 13);
    let saved = c.associate_barcode("0123456789012", BggId(13)).await.unwrap();
    assert_eq!(saved["ok"], true);
}

#[tokio::test]
async fn test_collection_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/games/collection/"))
        .and(body_json(json!({"game_id": 174430, "personal_notes": null, "custom_tags": "coop"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_entry(11)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/games/collection/11"))
        .and(body_json(json!({"for_sale_trade": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_entry(11)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/games/collection/11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let c = client(&server.uri());
    c.token_store().save_token("tok").await;

    let entry = c
        .add_to_collection(&NewCollectionEntry {
            game_id: BggId(174430),
            personal_notes: None,
            custom_tags: Some("coop".into()),
        })
        .await
        .unwrap();
    assert_eq!(entry.id, EntryId(11));

    let update = CollectionUpdate {
        for_sale_trade: Some(true),
        ..CollectionUpdate::default()
    };
    c.update_collection_entry(entry.id, &update).await.unwrap();
    c.delete_collection_entry(entry.id).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_wishlist_entry_is_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wishlists/"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"detail": "Game already in your collection"})),
        )
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .add_to_wishlist(&NewWishlistEntry {
            game_id: BggId(13),
            priority: Some(1),
            notes: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn test_plays_paging_and_internal_game_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plays/"))
        .and(query_param("skip", "20"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "owner_id": 1, "game_id": 7, "date": "2026-01-02T18:00:00", "game": game(13, "Catan")}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plays/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/plays/"))
        .and(body_json(json!({"bgg_id": 13, "rating": 8})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 2, "owner_id": 1, "game_id": 7, "date": "2026-01-03T18:00:00", "rating": 8}
        )))
        .mount(&server)
        .await;

    let c = client(&server.uri());
    let page = c
        .plays(Paging {
            skip: Some(20),
            limit: Some(10),
        })
        .await
        .unwrap();
    assert_eq!(page[0].game.title, "Catan");
    assert!(c.plays_for_game(GameId(7)).await.unwrap().is_empty());

    let play = c
        .log_play(
            BggId(13),
            PlayData {
                rating: Some(8),
                ..PlayData::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(play.rating, Some(8));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wishlists/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let c = client(&format!("{}/api/", server.uri()));
    assert!(c.wishlist().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_undecodable_success_body_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server.uri()).me().await.unwrap_err();
    assert!(matches!(err, ApiError::Protocol(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Port 9 (discard) on localhost is reliably closed in CI sandboxes.
    let err = client("http://127.0.0.1:9").me().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport(TransportError::Connect(_) | TransportError::Timeout)
    ));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games/collection/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(8)
        .mount(&server)
        .await;

    let c = client(&server.uri());
    c.token_store().save_token("tok").await;

    let calls = (0..8).map(|_| {
        let c = c.clone();
        async move { c.collection().await }
    });
    let results = futures_util::future::join_all(calls).await;
    assert!(results.iter().all(Result::is_ok));
}
