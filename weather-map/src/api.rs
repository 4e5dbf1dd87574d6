//! Open-Meteo API client
//!
//! Spawned from the effect handler; never called from the reducer or components.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::DEFAULT_API_URL;
use crate::geo::Coordinate;
use crate::state::WeatherSnapshot;

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure: DNS, connect, aborted request
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("weather service returned {0}")]
    Status(StatusCode),

    /// Body was not the expected JSON
    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// API response from Open-Meteo (only the current weather facet is requested)
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    time: String,
}

impl From<CurrentWeather> for WeatherSnapshot {
    fn from(current: CurrentWeather) -> Self {
        Self {
            temperature: current.temperature,
            wind_speed: current.windspeed,
            wind_direction: current.winddirection,
            time: current.time,
        }
    }
}

/// Client for the forecast endpoint
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl WeatherClient {
    /// Create a client for the given forecast endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured HTTP client (proxy, timeouts)
    pub fn with_http_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Request URL for a coordinate, using plain `f64` formatting
    pub fn forecast_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}?latitude={}&longitude={}&current_weather=true",
            self.base_url, coordinate.lat, coordinate.lon
        )
    }

    /// Fetch current weather at `coordinate`
    ///
    /// No timeout is configured; the transport default applies.
    pub async fn current_weather(
        &self,
        coordinate: Coordinate,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let response = self.client.get(self.forecast_url(coordinate)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await?;
        parse_current_weather(&body)
    }
}

/// Decode the `current_weather` object from a forecast response body
pub fn parse_current_weather(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let data: ForecastResponse = serde_json::from_str(body)?;
    Ok(data.current_weather.into())
}
