//! Error types for each pipeline stage.
//!
//! Stage errors keep the underlying cause for logging; [`Failure`] is the
//! collapsed taxonomy the CLI reports to the user.

use thiserror::Error;

/// A single GET that did not produce a response body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request URL is empty")]
    EmptyUrl,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Place name could not be turned into a location id.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected location search response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("location search returned no results")]
    NoData,
}

/// Location id could not be turned into a weather report.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected location weather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("location has no consolidated weather records")]
    NoData,
}

/// Why a run ended without a report.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("Input must contain the location name")]
    InvalidInput,

    #[error("Weather api connection error: {0}")]
    Transport(#[source] TransportError),

    #[error("Json parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Weather api contains no data")]
    NoData,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ResolveError> for Failure {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Transport(e) => Self::from(e),
            ResolveError::Parse(e) => Self::Parse(e),
            ResolveError::NoData => Self::NoData,
        }
    }
}

impl From<WeatherError> for Failure {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::Transport(e) => Self::from(e),
            WeatherError::Parse(e) => Self::Parse(e),
            WeatherError::NoData => Self::NoData,
        }
    }
}

impl From<TransportError> for Failure {
    fn from(err: TransportError) -> Self {
        match err {
            // Nothing reached the network; the client could not be set up.
            TransportError::Client(e) => Self::Internal(e.to_string()),
            other => Self::Transport(other),
        }
    }
}
