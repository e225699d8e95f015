//! randomuser.me adapter: fetches one generated user profile.
//!
//! The upstream response nests name/location/picture objects; this module
//! flattens them into the strings the caption needs. No API key required.

use super::{get_json, ApiError};
use reqwest::Client as HttpClient;
use serde::Deserialize;

const RANDOM_USER_URL: &str = "https://randomuser.me/api/";

#[derive(Debug, Deserialize)]
struct Envelope {
    results: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: RawName,
    gender: String,
    email: String,
    phone: String,
    location: RawLocation,
    picture: RawPicture,
}

#[derive(Debug, Deserialize)]
struct RawName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    city: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct RawPicture {
    large: String,
}

/// A flattened random user profile
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Full name, "First Last"
    pub name: String,
    /// Gender as reported by the generator
    pub gender: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Location, "City, Country"
    pub location: String,
    /// URL of the large profile picture
    pub picture: String,
}

impl From<RawUser> for UserProfile {
    fn from(raw: RawUser) -> Self {
        Self {
            name: format!("{} {}", raw.name.first, raw.name.last),
            gender: raw.gender,
            email: raw.email,
            phone: raw.phone,
            location: format!("{}, {}", raw.location.city, raw.location.country),
            picture: raw.picture.large,
        }
    }
}

/// Client for randomuser.me
pub struct RandomUserClient {
    http: HttpClient,
}

impl RandomUserClient {
    /// Create a new client
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetches one random user profile.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport or decoding failure, or
    /// `ApiError::MissingField` when the `results` array comes back empty.
    pub async fn fetch(&self) -> Result<UserProfile, ApiError> {
        let envelope: Envelope = get_json(&self.http, RANDOM_USER_URL, &[], &[]).await?;
        envelope
            .results
            .into_iter()
            .next()
            .map(UserProfile::from)
            .ok_or(ApiError::MissingField("results"))
    }
}
