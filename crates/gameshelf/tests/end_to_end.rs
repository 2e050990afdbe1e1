//! Full-stack tests: reqwest transport, file-backed token store and the
//! session controller against a mock service.

use gameshelf::prelude::*;
use gameshelf::{Session, TOKEN_KEY};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(server: &MockServer, dir: &TempDir) -> Session {
    GameshelfBuilder::new()
        .base_url(server.uri())
        .token_file(dir.path().join("session.json"))
        .build()
        .unwrap()
}

fn read_file(dir: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/users/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": token, "token_type": "bearer"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "email": "u@x.com"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_session_survives_restart_until_logout() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "tok1").await;

    // First run: nothing stored, sign in.
    let first = session(&server, &dir);
    assert_eq!(first.bootstrap().await.state, SessionState::signed_out());
    first.login("u@x.com", "pw").await.unwrap();
    assert_eq!(read_file(&dir)[TOKEN_KEY], "tok1");
    drop(first);

    // Second run: the stored token restores the session.
    let second = session(&server, &dir);
    let snapshot = second.bootstrap().await;
    assert_eq!(snapshot.state.profile().unwrap().email, "u@x.com");
    assert_eq!(snapshot.state.token().unwrap().as_str(), "tok1");

    second.logout().await;
    assert!(read_file(&dir).get(TOKEN_KEY).is_none());

    // Third run: signed out again.
    let third = session(&server, &dir);
    assert_eq!(third.bootstrap().await.state, SessionState::signed_out());
}

#[tokio::test]
async fn test_expired_stored_token_is_discarded_on_bootstrap() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("session.json"),
        json!({ "userToken": "expired" }).to_string(),
    )
    .unwrap();
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let s = session(&server, &dir);
    let snapshot = s.bootstrap().await;

    assert_eq!(snapshot.state, SessionState::signed_out());
    assert!(read_file(&dir).get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn test_collection_after_login_is_authorized() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "tok1").await;
    Mock::given(method("GET"))
        .and(path("/games/collection/"))
        .and(header("authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let s = session(&server, &dir);
    s.login("u@x.com", "pw").await.unwrap();

    assert!(s.client().collection().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_password_converts_into_facade_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .and(path("/users/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect credentials"})),
        )
        .mount(&server)
        .await;

    let s = session(&server, &dir);
    let result: Result<(), GameshelfError> = async {
        s.login("u@x.com", "wrong").await?;
        Ok(())
    }
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, GameshelfError::Session(SessionError::LoginFailed(_))));
    assert_eq!(err.to_string(), "Incorrect credentials");
    assert_eq!(s.snapshot().state.error(), Some("Incorrect credentials"));
}
