use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::TransportError;

pub mod http;
#[cfg(any(test, feature = "testing"))]
pub mod scripted;

pub use http::HttpTransport;
#[cfg(any(test, feature = "testing"))]
pub use scripted::ScriptedTransport;

/// One blocking-style GET: the whole body or a failure.
///
/// Implementations must not retry. An empty `url` is rejected with
/// [`TransportError::EmptyUrl`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url).await
    }
}
