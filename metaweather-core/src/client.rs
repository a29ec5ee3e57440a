use tracing::{debug, warn};

use crate::{
    config::ServiceConfig,
    error::{Failure, ResolveError, WeatherError},
    location,
    model::{LocationId, WeatherReport},
    transport::{HttpTransport, Transport},
    weather,
};

/// Resolver and fetcher bound to one transport and service configuration.
#[derive(Debug, Clone)]
pub struct WeatherClient<T> {
    transport: T,
    config: ServiceConfig,
}

impl WeatherClient<HttpTransport> {
    /// HTTP client against the host in `config`.
    pub fn http(config: ServiceConfig) -> Result<Self, Failure> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> WeatherClient<T> {
    pub fn new(transport: T, config: ServiceConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub async fn resolve(&self, query: &str) -> Result<LocationId, ResolveError> {
        location::resolve(&self.transport, &self.config, query).await
    }

    pub async fn fetch_weather(&self, id: LocationId) -> Result<WeatherReport, WeatherError> {
        weather::fetch_weather(&self.transport, &self.config, id).await
    }

    /// Resolve `query`, then fetch weather for the first match.
    ///
    /// A blank query fails with [`Failure::InvalidInput`] before any request.
    pub async fn report_for(&self, query: &str) -> Result<WeatherReport, Failure> {
        if query.trim().is_empty() {
            return Err(Failure::InvalidInput);
        }

        let id = self
            .resolve(query)
            .await
            .inspect_err(|err| warn!(%err, query, "location search failed"))?;
        debug!(%id, "location id resolved");

        let report = self
            .fetch_weather(id)
            .await
            .inspect_err(|err| warn!(%err, %id, "weather lookup failed"))?;

        Ok(report)
    }
}
