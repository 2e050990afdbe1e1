//! The [`ApiClient`] core: URL building, bearer injection, dispatch and
//! response decoding.
//!
//! Every resource method (in the sibling modules) boils down to:
//!
//! ```text
//! Call { method, url, body, access }
//!   → attach bearer (read the token store NOW, not at construction)
//!   → transport.send
//!   → 2xx ? decode : ApiError::Status
//! ```
//!
//! That middle step is the whole point of this crate: the token is read
//! through on every request, so a login or logout is visible to the very
//! next call no matter who holds a clone of the client.

use std::sync::Arc;

use gameshelf_protocol::{Codec, FORM_CONTENT_TYPE, JsonCodec};
use gameshelf_store::{KeyValueStore, TokenStore};
use gameshelf_transport::{HttpRequest, HttpResponse, Method, Transport};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{ApiError, ClientConfig};

// ---------------------------------------------------------------------------
// Call: one request, before authorization
// ---------------------------------------------------------------------------

/// How a call is authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access<'a> {
    /// Read the token store and attach `Bearer <token>` if one is stored.
    Bearer,
    /// Never attach credentials (register, login, public profiles).
    Public,
    /// Attach this exact token, bypassing the store.
    Token(&'a str),
}

/// An encoded request body and its `Content-Type`.
pub(crate) type Body = (&'static str, Vec<u8>);

/// A request description the resource methods hand to [`ApiClient::send`].
#[derive(Debug)]
pub(crate) struct Call<'a> {
    method: Method,
    url: Url,
    body: Option<Body>,
    access: Access<'a>,
}

impl<'a> Call<'a> {
    fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            access: Access::Bearer,
        }
    }

    pub(crate) fn get(url: Url) -> Self {
        Self::new(Method::Get, url)
    }

    pub(crate) fn post(url: Url) -> Self {
        Self::new(Method::Post, url)
    }

    pub(crate) fn put(url: Url) -> Self {
        Self::new(Method::Put, url)
    }

    pub(crate) fn delete(url: Url) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Attaches a body produced by [`ApiClient::encode`].
    pub(crate) fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn form(mut self, body: Vec<u8>) -> Self {
        self.body = Some((FORM_CONTENT_TYPE, body));
        self
    }

    pub(crate) fn public(mut self) -> Self {
        self.access = Access::Public;
        self
    }

    pub(crate) fn with_token(mut self, token: &'a str) -> Self {
        self.access = Access::Token(token);
        self
    }
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// The single point of contact with the remote service.
///
/// Generic over the [`Transport`] (reqwest in production, a fake in
/// tests) and the [`KeyValueStore`] behind the token store.
///
/// Each method performs exactly one round trip. There is no retry, no
/// response cache and no batching; callers that want any of those build
/// them on top.
pub struct ApiClient<T: Transport, S: KeyValueStore> {
    transport: Arc<T>,
    tokens: TokenStore<S>,
    config: ClientConfig,
    codec: JsonCodec,
}

impl<T: Transport, S: KeyValueStore> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
            codec: self.codec,
        }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Creates a client.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidUrl`] if `config.base_url` can't have
    /// endpoint paths appended to it.
    pub fn new(
        transport: T,
        tokens: TokenStore<S>,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.to_string()));
        }
        Ok(Self {
            transport: Arc::new(transport),
            tokens,
            config,
            codec: JsonCodec,
        })
    }

    /// The token store requests are authorized from.
    pub fn token_store(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds `<base_url>/<segments...>`, percent-encoding each segment.
    ///
    /// A trailing `""` segment produces a trailing slash, which several
    /// of the service's collection routes require.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Encodes a request body with the client's codec.
    pub(crate) fn encode<B: Serialize>(&self, body: &B) -> Result<Body, ApiError> {
        Ok((self.codec.content_type(), self.codec.encode(body)?))
    }

    /// Authorizes and dispatches one call. Non-2xx becomes
    /// [`ApiError::Status`].
    pub(crate) async fn send(&self, call: Call<'_>) -> Result<HttpResponse, ApiError> {
        let Call {
            method,
            url,
            body,
            access,
        } = call;

        let mut request = HttpRequest::new(method, url.as_str())
            .with_header("Accept", self.codec.content_type());
        if let Some((content_type, bytes)) = body {
            request = request.with_body(content_type, bytes);
        }

        // The token read completes before dispatch: one suspend point,
        // strictly ordered.
        let authorized = self.authorize(&mut request, access).await;

        tracing::debug!(%method, path = url.path(), authorized, "sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, path = url.path(), error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        tracing::debug!(
            %method,
            path = url.path(),
            status = response.status,
            "response received"
        );

        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response))
        }
    }

    /// [`send`](Self::send), then decode the 2xx body as `R`.
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, call: Call<'_>) -> Result<R, ApiError> {
        let response = self.send(call).await?;
        Ok(self.codec.decode(&response.body)?)
    }

    /// [`send`](Self::send) for endpoints that answer `204 No Content`.
    pub(crate) async fn fetch_empty(&self, call: Call<'_>) -> Result<(), ApiError> {
        self.send(call).await.map(|_| ())
    }

    /// Attaches `Authorization: Bearer <token>` per `access`.
    /// Returns whether a header was attached.
    async fn authorize(&self, request: &mut HttpRequest, access: Access<'_>) -> bool {
        let token = match access {
            Access::Public => None,
            Access::Bearer => self.tokens.token().await,
            Access::Token(token) => Some(token.to_string()),
        };
        match token {
            Some(token) => {
                request.set_header("Authorization", format!("Bearer {token}"));
                true
            }
            None => false,
        }
    }
}
