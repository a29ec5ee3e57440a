use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{config::ServiceConfig, error::TransportError};

use super::Transport;

const USER_AGENT: &str = concat!("metaweather/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] over HTTPS using reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build a client whose every request is bounded by `config.timeout()`.
    pub fn new(config: &ServiceConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        if url.is_empty() {
            return Err(TransportError::EmptyUrl);
        }

        debug!(url, "sending GET");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Request { url: url.to_owned(), source })?;

        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status { url: url.to_owned(), status: status.as_u16() });
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| TransportError::Request { url: url.to_owned(), source })?;

        debug!(url, bytes = body.len(), "response received");

        Ok(body.to_vec())
    }
}
