//! Configuration and settings management
//!
//! Loads settings from environment variables and defines API constants.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// TheCatAPI key (sent as the `x-api-key` header)
    #[serde(rename = "the_cat_api_key")]
    pub cat_api_key: Option<String>,

    /// NASA API key for the APOD endpoint (query parameter)
    #[serde(default = "default_nasa_api_key")]
    pub nasa_api_key: String,

    /// OpenWeatherMap API key (query parameter)
    pub openweather_api_key: Option<String>,

    /// Language code for weather descriptions (`lang` query parameter)
    #[serde(default = "default_weather_lang")]
    pub weather_lang: String,
}

fn default_nasa_api_key() -> String {
    // NASA accepts this shared key with a low rate limit
    "DEMO_KEY".to_string()
}

fn default_weather_lang() -> String {
    "ru".to_string()
}

/// Default timeout for outbound API requests in seconds
pub const DEFAULT_API_HTTP_TIMEOUT_SECS: u64 = 30;

/// Returns the outbound API timeout in seconds.
///
/// Reads `API_HTTP_TIMEOUT_SECS` from the environment, falling back to
/// [`DEFAULT_API_HTTP_TIMEOUT_SECS`]. This prevents a handler from hanging
/// forever when a remote API is unresponsive.
#[must_use]
pub fn get_api_http_timeout_secs() -> u64 {
    std::env::var("API_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_API_HTTP_TIMEOUT_SECS)
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add in the current environment file
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked into git
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of APP)
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Also add settings from environment variables directly (without prefix)
            // Note: Environment::default() auto-converts UPPER_SNAKE_CASE to snake_case
            // ignore_empty treats empty env vars as unset
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        // Fallback: check environment variables directly if config didn't pick them up
        if settings.cat_api_key.is_none() {
            if let Ok(val) = std::env::var("THE_CAT_API_KEY") {
                if !val.is_empty() {
                    settings.cat_api_key = Some(val);
                }
            }
        }
        if settings.openweather_api_key.is_none() {
            if let Ok(val) = std::env::var("OPENWEATHER_API_KEY") {
                if !val.is_empty() {
                    settings.openweather_api_key = Some(val);
                }
            }
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Tests run sequentially to avoid environment variable race conditions
    #[test]
    fn test_config_env_loading() -> Result<(), Box<dyn std::error::Error>> {
        env::set_var("TELEGRAM_TOKEN", "dummy_token");
        env::set_var("THE_CAT_API_KEY", "cat-key");

        let settings = Settings::new()?;
        assert_eq!(settings.telegram_token, "dummy_token");
        assert_eq!(settings.cat_api_key, Some("cat-key".to_string()));

        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("THE_CAT_API_KEY");
        Ok(())
    }

    #[test]
    fn test_config_defaults() -> Result<(), Box<dyn std::error::Error>> {
        env::set_var("TELEGRAM_TOKEN", "dummy_token");
        env::remove_var("NASA_API_KEY");
        env::remove_var("WEATHER_LANG");
        // Empty env vars are treated as unset
        env::set_var("OPENWEATHER_API_KEY", "");

        let settings = Settings::new()?;
        assert_eq!(settings.nasa_api_key, "DEMO_KEY");
        assert_eq!(settings.weather_lang, "ru");
        assert_eq!(settings.openweather_api_key, None);

        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("OPENWEATHER_API_KEY");
        Ok(())
    }

    #[test]
    fn test_timeout_fallback() {
        env::remove_var("API_HTTP_TIMEOUT_SECS");
        assert_eq!(get_api_http_timeout_secs(), DEFAULT_API_HTTP_TIMEOUT_SECS);

        env::set_var("API_HTTP_TIMEOUT_SECS", "not-a-number");
        assert_eq!(get_api_http_timeout_secs(), DEFAULT_API_HTTP_TIMEOUT_SECS);

        env::set_var("API_HTTP_TIMEOUT_SECS", "5");
        assert_eq!(get_api_http_timeout_secs(), 5);
        env::remove_var("API_HTTP_TIMEOUT_SECS");
    }
}
