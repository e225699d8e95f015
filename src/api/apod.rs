//! NASA Astronomy Picture of the Day adapter.
//!
//! Every request targets a uniformly random date within the last five
//! years, so repeated `/apod` calls surface different pictures.

use super::{get_json, ApiError};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use reqwest::Client as HttpClient;
use serde::Deserialize;

const APOD_URL: &str = "https://api.nasa.gov/planetary/apod";

/// How far back a random picture may be drawn, in days
pub const HISTORY_DAYS: i64 = 365 * 5;

/// One day's APOD entry
#[derive(Debug, Clone, Deserialize)]
pub struct Apod {
    /// Picture title
    #[serde(default = "default_title")]
    pub title: String,
    /// Long-form explanation text
    #[serde(default = "default_explanation")]
    pub explanation: String,
    /// Media URL; absent when NASA has no picture for the date
    #[serde(default)]
    pub url: Option<String>,
    /// Media kind reported by NASA, usually "image" or "video"
    #[serde(default)]
    pub media_type: Option<String>,
}

fn default_title() -> String {
    "Космическое изображение".to_string()
}

fn default_explanation() -> String {
    "Описание недоступно".to_string()
}

impl Apod {
    /// Whether the entry's URL points at a plain image.
    ///
    /// NASA occasionally serves videos; those cannot be sent as a Telegram
    /// photo and get a link reply instead.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.as_deref().is_none_or(|m| m == "image")
    }
}

/// Draws a uniformly random date in `[today - HISTORY_DAYS, today]`.
#[must_use]
pub fn random_apod_date(today: NaiveDate) -> NaiveDate {
    let offset = rand::thread_rng().gen_range(0..=HISTORY_DAYS);
    today - Duration::days(offset)
}

/// Client for the NASA APOD endpoint
pub struct ApodClient {
    http: HttpClient,
    api_key: String,
}

impl ApodClient {
    /// Create a new client; `DEMO_KEY` works with a reduced quota
    #[must_use]
    pub const fn new(http: HttpClient, api_key: String) -> Self {
        Self { http, api_key }
    }

    /// Fetches the APOD entry for a random date within the last five years.
    ///
    /// A response without a `url` field is still `Ok`; callers detect the
    /// miss via [`Apod::url`].
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport or decoding failure.
    pub async fn fetch_random(&self) -> Result<Apod, ApiError> {
        let date = random_apod_date(Utc::now().date_naive());
        self.fetch(date).await
    }

    /// Fetches the APOD entry for a specific date.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport or decoding failure.
    pub async fn fetch(&self, date: NaiveDate) -> Result<Apod, ApiError> {
        let date = date.format("%Y-%m-%d").to_string();
        get_json(
            &self.http,
            APOD_URL,
            &[("api_key", self.api_key.as_str()), ("date", date.as_str())],
            &[],
        )
        .await
    }
}
