//! TheCatAPI adapter: breed catalogue and breed photos.
//!
//! Breed lookup is a two-step flow: fetch the full breed list, scan it by
//! case-insensitive name, then search for a photo by the matched breed id.

use super::{get_json, ApiError};
use reqwest::Client as HttpClient;
use serde::Deserialize;

const BREEDS_URL: &str = "https://api.thecatapi.com/v1/breeds";
const IMAGE_SEARCH_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// A cat breed record from TheCatAPI
#[derive(Debug, Clone, Deserialize)]
pub struct Breed {
    /// Short breed identifier used by the image search endpoint
    pub id: String,
    /// Human-readable breed name
    pub name: String,
    /// Free-text breed description
    #[serde(default)]
    pub description: String,
    /// Life span range in years, e.g. "12 - 15"
    #[serde(default)]
    pub life_span: String,
    /// Country of origin
    #[serde(default)]
    pub origin: Option<String>,
    /// Comma-separated temperament traits
    #[serde(default)]
    pub temperament: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BreedImage {
    url: String,
}

/// Finds a breed by case-insensitive name match.
#[must_use]
pub fn find_breed<'a>(breeds: &'a [Breed], name: &str) -> Option<&'a Breed> {
    let wanted = name.trim();
    breeds.iter().find(|b| b.name.eq_ignore_ascii_case(wanted))
}

/// Client for TheCatAPI
pub struct CatClient {
    http: HttpClient,
    api_key: Option<String>,
}

impl CatClient {
    /// Create a new client; the API key is optional because the breed
    /// endpoints are publicly accessible with a reduced quota
    #[must_use]
    pub const fn new(http: HttpClient, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        self.api_key
            .as_deref()
            .map(|key| vec![("x-api-key", key)])
            .unwrap_or_default()
    }

    /// Fetches the full breed catalogue.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport or decoding failure.
    pub async fn list_breeds(&self) -> Result<Vec<Breed>, ApiError> {
        get_json(&self.http, BREEDS_URL, &[], &self.headers()).await
    }

    /// Looks up a breed by case-insensitive name, `None` when unknown.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the breed list cannot be fetched.
    pub async fn breed_info(&self, name: &str) -> Result<Option<Breed>, ApiError> {
        let breeds = self.list_breeds().await?;
        Ok(find_breed(&breeds, name).cloned())
    }

    /// Fetches a photo URL for the given breed id, `None` when the search
    /// comes back empty.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport or decoding failure.
    pub async fn breed_image(&self, breed_id: &str) -> Result<Option<String>, ApiError> {
        let images: Vec<BreedImage> = get_json(
            &self.http,
            IMAGE_SEARCH_URL,
            &[("breed_ids", breed_id)],
            &self.headers(),
        )
        .await?;
        Ok(images.into_iter().next().map(|img| img.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_breeds() -> Vec<Breed> {
        serde_json::from_str(
            r#"[
                {
                    "id": "siam",
                    "name": "Siamese",
                    "description": "Graceful and talkative.",
                    "life_span": "12 - 15",
                    "origin": "Thailand",
                    "temperament": "Active, Agile"
                },
                {
                    "id": "beng",
                    "name": "Bengal",
                    "life_span": "12 - 16"
                }
            ]"#,
        )
        .expect("sample breeds must deserialize")
    }

    #[test]
    fn find_breed_is_case_insensitive() {
        let breeds = sample_breeds();
        assert_eq!(find_breed(&breeds, "siamese").map(|b| b.id.as_str()), Some("siam"));
        assert_eq!(find_breed(&breeds, "SIAMESE").map(|b| b.id.as_str()), Some("siam"));
        assert_eq!(find_breed(&breeds, "  Bengal  ").map(|b| b.id.as_str()), Some("beng"));
    }

    #[test]
    fn find_breed_misses_unknown_names() {
        let breeds = sample_breeds();
        assert!(find_breed(&breeds, "nonexistentbreed123").is_none());
        assert!(find_breed(&breeds, "").is_none());
    }

    #[test]
    fn breed_optional_fields_default() {
        let breeds = sample_breeds();
        let bengal = find_breed(&breeds, "bengal").expect("bengal is in the sample");
        assert_eq!(bengal.origin, None);
        assert_eq!(bengal.temperament, None);
        assert_eq!(bengal.description, "");
    }

    #[test]
    fn image_search_result_decodes() {
        let images: Vec<BreedImage> =
            serde_json::from_str(r#"[{"id":"x","url":"https://cdn2.thecatapi.com/images/x.jpg","width":1,"height":1}]"#)
                .expect("image search result must deserialize");
        assert_eq!(
            images.into_iter().next().map(|i| i.url),
            Some("https://cdn2.thecatapi.com/images/x.jpg".to_string())
        );
    }
}
