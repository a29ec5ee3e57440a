use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
};

use crate::error::TransportError;

use super::Transport;

/// Replays queued responses in order and records every requested URL.
///
/// A request with nothing left in the queue is answered with HTTP 404.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn respond(self, body: impl Into<Vec<u8>>) -> Self {
        self.push(Ok(body.into()))
    }

    /// Queue an HTTP error status for the next request.
    pub fn fail_with_status(self, status: u16) -> Self {
        self.push(Err(TransportError::Status { url: String::new(), status }))
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn push(self, response: Result<Vec<u8>, TransportError>) -> Self {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).push_back(response);
        self
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        if url.is_empty() {
            return Err(TransportError::EmptyUrl);
        }

        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(url.to_owned());

        let next = self.responses.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
        match next {
            Some(Err(TransportError::Status { status, .. })) => {
                Err(TransportError::Status { url: url.to_owned(), status })
            }
            Some(response) => response,
            None => Err(TransportError::Status { url: url.to_owned(), status: 404 }),
        }
    }
}
