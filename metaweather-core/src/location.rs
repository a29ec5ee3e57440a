//! Place name → location id.
//!
//! The search endpoint may return several candidates; the first one always
//! wins and the rest are never looked at.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ServiceConfig, error::ResolveError, model::LocationId, transport::Transport, wire,
};

#[derive(Debug, Deserialize)]
struct SearchResult {
    woeid: u64,
}

/// Search for `query` and return the id of the first match.
pub async fn resolve<T>(
    transport: &T,
    config: &ServiceConfig,
    query: &str,
) -> Result<LocationId, ResolveError>
where
    T: Transport + ?Sized,
{
    let url = config.search_url(query);
    debug!(query, %url, "resolving location");

    let body = transport.fetch(&url).await?;
    parse_location(&body)
}

/// Extract the first `woeid` from a location search response body.
pub fn parse_location(body: &[u8]) -> Result<LocationId, ResolveError> {
    let results: Vec<Value> = serde_json::from_slice(body)?;

    let first = results.into_iter().next().ok_or(ResolveError::NoData)?;
    let first = wire::into_object(first)?;
    let title = wire::title(&first);

    let result = SearchResult::deserialize(Value::Object(first))?;
    let id = LocationId::new(result.woeid);

    debug!(%id, title = title.as_deref().unwrap_or("<untitled>"), "location resolved");

    Ok(id)
}
