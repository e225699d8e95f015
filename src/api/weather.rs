//! OpenWeatherMap adapter: current conditions for a city.
//!
//! Requests metric units and a localized description. Any non-success
//! status from the API is treated as "city not found" rather than an
//! error, matching how the upstream reports unknown city names.

use super::{get_json, ApiError};
use reqwest::Client as HttpClient;
use serde::Deserialize;

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Deserialize)]
struct RawWeather {
    name: String,
    main: RawMain,
    weather: Vec<RawCondition>,
    wind: RawWind,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    feels_like: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: f64,
}

/// Current weather for one city
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    /// City name as resolved by the API
    pub city: String,
    /// Temperature in °C
    pub temp: f64,
    /// Perceived temperature in °C
    pub feels_like: f64,
    /// Localized condition description
    pub description: String,
    /// Relative humidity in percent
    pub humidity: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// URL of the condition icon
    pub icon_url: String,
}

fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@2x.png")
}

impl TryFrom<RawWeather> for WeatherSnapshot {
    type Error = ApiError;

    fn try_from(raw: RawWeather) -> Result<Self, ApiError> {
        let condition = raw
            .weather
            .into_iter()
            .next()
            .ok_or(ApiError::MissingField("weather"))?;
        Ok(Self {
            city: raw.name,
            temp: raw.main.temp,
            feels_like: raw.main.feels_like,
            description: condition.description,
            humidity: raw.main.humidity,
            wind_speed: raw.wind.speed,
            icon_url: icon_url(&condition.icon),
        })
    }
}

/// Client for the OpenWeatherMap current-weather endpoint
pub struct WeatherClient {
    http: HttpClient,
    api_key: Option<String>,
    lang: String,
}

impl WeatherClient {
    /// Create a new client; requests fail with `ApiError::MissingKey`
    /// until a key is configured
    #[must_use]
    pub const fn new(http: HttpClient, api_key: Option<String>, lang: String) -> Self {
        Self { http, api_key, lang }
    }

    /// Fetches current weather for `city`, `None` when the city is unknown.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingKey` when no API key is configured, or a
    /// transport/decoding `ApiError`.
    pub async fn current(&self, city: &str) -> Result<Option<WeatherSnapshot>, ApiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingKey("OPENWEATHER_API_KEY"))?;

        let result: Result<RawWeather, ApiError> = get_json(
            &self.http,
            WEATHER_URL,
            &[
                ("q", city),
                ("appid", key),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ],
            &[],
        )
        .await;

        match result {
            Ok(raw) => Ok(Some(raw.try_into()?)),
            // The API answers 404 for unknown cities and 400 for garbage
            // input; both read as "not found" to the user
            Err(ApiError::Status { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
