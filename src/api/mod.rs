//! HTTP adapters for the third-party REST APIs behind the bot commands.
//!
//! Each submodule wraps exactly one remote service and maps its JSON
//! responses into flat result types. A remote "miss" (unknown breed,
//! unknown city, empty image search) is expressed as `None` in the success
//! type; [`ApiError`] is reserved for transport and decoding failures.

/// NASA Astronomy Picture of the Day
pub mod apod;
/// TheCatAPI breed catalogue and photos
pub mod cats;
/// randomuser.me profile generator
pub mod random_user;
/// OpenWeatherMap current conditions
pub mod weather;

use crate::config::{get_api_http_timeout_secs, Settings};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by the API adapters
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error during network communication
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status returned by the remote service
    #[error("API error: {status} - {body}")]
    Status {
        /// HTTP status code of the response
        status: StatusCode,
        /// Response body, truncated for logging
        body: String,
    },
    /// Error while decoding the JSON response
    #[error("JSON error: {0}")]
    Json(String),
    /// Expected field missing from an otherwise well-formed response
    #[error("missing field `{0}` in API response")]
    MissingField(&'static str),
    /// API key required by the service is not configured
    #[error("missing API key: {0} is not set")]
    MissingKey(&'static str),
}

/// Creates an HTTP client configured with the standard API timeout.
///
/// Uses the `API_HTTP_TIMEOUT_SECS` environment variable or a 30s default.
#[must_use]
pub fn create_http_client() -> HttpClient {
    let timeout = Duration::from_secs(get_api_http_timeout_secs());
    HttpClient::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| HttpClient::new())
}

/// Sends an HTTP GET request and returns the decoded JSON response.
///
/// Handles query parameters, optional custom headers, status checking and
/// JSON decoding in one place so the adapters stay thin.
///
/// # Errors
///
/// Returns `ApiError::Network` on connectivity issues, `ApiError::Status`
/// on non-success status codes, or `ApiError::Json` if decoding fails.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &HttpClient,
    url: &str,
    query: &[(&str, &str)],
    headers: &[(&str, &str)],
) -> Result<T, ApiError> {
    let mut request = client.get(url).query(query);
    for (key, value) in headers {
        request = request.header(*key, *value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        // Keep error payloads short enough for a log line
        let body = match body.char_indices().nth(500) {
            Some((idx, _)) => format!("{}... (truncated)", &body[..idx]),
            None => body,
        };
        return Err(ApiError::Status { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Json(e.to_string()))
}

/// Bundle of all adapters, shared across handlers via `Arc`
pub struct ApiClients {
    /// TheCatAPI adapter
    pub cats: cats::CatClient,
    /// NASA APOD adapter
    pub apod: apod::ApodClient,
    /// randomuser.me adapter
    pub users: random_user::RandomUserClient,
    /// OpenWeatherMap adapter
    pub weather: weather::WeatherClient,
}

impl ApiClients {
    /// Build all adapters on top of one shared HTTP client
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let http = create_http_client();
        Self {
            cats: cats::CatClient::new(http.clone(), settings.cat_api_key.clone()),
            apod: apod::ApodClient::new(http.clone(), settings.nasa_api_key.clone()),
            users: random_user::RandomUserClient::new(http.clone()),
            weather: weather::WeatherClient::new(
                http,
                settings.openweather_api_key.clone(),
                settings.weather_lang.clone(),
            ),
        }
    }
}
