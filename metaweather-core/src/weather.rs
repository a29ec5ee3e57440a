//! Location id → current weather.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ServiceConfig,
    error::WeatherError,
    model::{LocationId, WeatherReport},
    transport::Transport,
    wire,
};

#[derive(Debug, Deserialize)]
struct LocationWeather {
    consolidated_weather: Vec<Value>,
}

/// One day of the `consolidated_weather` array. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct ConsolidatedWeather {
    weather_state_name: String,
    wind_direction_compass: String,
    min_temp: f64,
    max_temp: f64,
    wind_speed: f64,
}

impl From<ConsolidatedWeather> for WeatherReport {
    fn from(w: ConsolidatedWeather) -> Self {
        Self {
            state_name: w.weather_state_name,
            wind_direction_compass: w.wind_direction_compass,
            min_temp: w.min_temp,
            max_temp: w.max_temp,
            wind_speed: w.wind_speed,
        }
    }
}

/// Fetch the location record for `id` and build a report from its first day.
pub async fn fetch_weather<T>(
    transport: &T,
    config: &ServiceConfig,
    id: LocationId,
) -> Result<WeatherReport, WeatherError>
where
    T: Transport + ?Sized,
{
    let url = config.location_url(id);
    debug!(%id, %url, "fetching weather");

    let body = transport.fetch(&url).await?;
    parse_weather(&body)
}

/// Build a report from the first `consolidated_weather` entry of a lookup body.
pub fn parse_weather(body: &[u8]) -> Result<WeatherReport, WeatherError> {
    let root: Value = serde_json::from_slice(body)?;
    let root = wire::into_object(root)?;
    let title = wire::title(&root);

    let location = LocationWeather::deserialize(Value::Object(root))?;

    let first = location.consolidated_weather.into_iter().next().ok_or(WeatherError::NoData)?;
    let first = wire::into_object(first)?;
    let record = ConsolidatedWeather::deserialize(Value::Object(first))?;

    debug!(
        title = title.as_deref().unwrap_or("<untitled>"),
        state = %record.weather_state_name,
        "weather record parsed"
    );

    Ok(record.into())
}
