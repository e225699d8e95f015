#![deny(missing_docs)]
//! Telefetch - a Telegram bot that answers a handful of commands by
//! fetching data from public REST APIs (TheCatAPI, NASA APOD,
//! randomuser.me, OpenWeatherMap) and replying with a photo and an
//! HTML-formatted caption.

/// Adapters for the third-party REST APIs
pub mod api;
/// Telegram command handlers and reply formatting
pub mod bot;
/// Configuration management
pub mod config;
