//! Transport abstraction layer for GameShelf.
//!
//! Provides the [`Transport`] trait that abstracts over how an HTTP
//! request actually reaches the remote service, plus the plain
//! [`HttpRequest`] / [`HttpResponse`] values that cross it.
//!
//! Keeping the wire behind a trait lets the layers above be tested with
//! an in-process fake instead of a live server.
//!
//! # Feature Flags
//!
//! - `reqwest` (default): HTTP transport via `reqwest`

mod error;
mod http;
#[cfg(feature = "reqwest")]
mod reqwest_transport;

pub use error::TransportError;
pub use http::{HttpRequest, HttpResponse, Method};
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;

use std::future::Future;
use std::sync::Arc;

/// Sends one HTTP request and returns the response.
///
/// Implementations perform exactly one round trip: no retries, no
/// caching. A response with any status code is `Ok`; `Err` is reserved
/// for "no response at all".
pub trait Transport: Send + Sync + 'static {
    /// Dispatches the request and waits for the full response body.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}
