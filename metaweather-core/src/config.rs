use std::time::Duration;

use crate::model::LocationId;

/// Public MetaWeather host.
pub const DEFAULT_BASE_URL: &str = "https://www.metaweather.com";

/// Location search endpoint, takes a `query` parameter.
pub const SEARCH_PATH: &str = "/api/location/search/";

/// Location lookup endpoint prefix, followed by `<woeid>/`.
pub const LOCATION_PATH: &str = "/api/location/";

/// Upper bound for a single request, connect and body read included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how the weather service is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ServiceConfig {
    /// Point the client at another host, e.g. a local mock server.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url, timeout: DEFAULT_TIMEOUT }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Search URL for a free-text place name. The name is percent-encoded.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}?query={}", self.base_url, SEARCH_PATH, urlencoding::encode(query))
    }

    /// Lookup URL for a resolved location.
    pub fn location_url(&self, id: LocationId) -> String {
        format!("{}{}{}/", self.base_url, LOCATION_PATH, id)
    }
}
