//! Integration tests for the reqwest transport.
//!
//! These spin up a real HTTP mock server so the request actually goes
//! over a socket: headers, body bytes and status codes must survive the
//! round trip unchanged.

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use std::time::Duration;

    use gameshelf_transport::{
        HttpRequest, Method, ReqwestTransport, Transport, TransportError,
    };
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(Some(Duration::from_secs(5)), "gameshelf-test")
            .expect("transport should build")
    }

    #[tokio::test]
    async fn test_send_forwards_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wishlists/"))
            .and(header("authorization", "Bearer tok1"))
            .and(header("content-type", "application/json"))
            .and(body_string(r#"{"game_id":13}"#))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("x-request-id", "abc")
                    .set_body_string(r#"{"id":1}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = HttpRequest::new(
            Method::Post,
            format!("{}/wishlists/", server.uri()),
        )
        .with_header("Authorization", "Bearer tok1")
        .with_body("application/json", br#"{"game_id":13}"#.to_vec());

        let response = transport().send(request).await.expect("should send");

        assert_eq!(response.status, 201);
        assert_eq!(response.header("X-Request-Id"), Some("abc"));
        assert_eq!(response.text(), r#"{"id":1}"#);
    }

    #[tokio::test]
    async fn test_send_error_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"detail":"Not authenticated"}"#),
            )
            .mount(&server)
            .await;

        let response = transport()
            .send(HttpRequest::new(
                Method::Get,
                format!("{}/users/me", server.uri()),
            ))
            .await
            .expect("a 401 is still a response");

        assert_eq!(response.status, 401);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_send_unreachable_host_is_transport_error() {
        // Bind then drop a mock server so the port is almost certainly
        // closed when we connect.
        let uri = {
            let server = MockServer::start().await;
            server.uri()
        };

        let result = transport()
            .send(HttpRequest::new(Method::Get, format!("{uri}/users/me")))
            .await;

        assert!(matches!(
            result,
            Err(TransportError::Connect(_) | TransportError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_send_invalid_url_is_invalid_request() {
        let result = transport()
            .send(HttpRequest::new(Method::Get, "not a url"))
            .await;

        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }
}
