//! Command handlers.
//!
//! Each handler validates its argument, calls one API adapter and sends a
//! formatted reply. Adapter failures are logged with full detail and
//! reported to the chat as a generic "service unavailable" message so that
//! internal error text never reaches end users.

use crate::api::{ApiClients, ApiError};
use crate::bot::captions;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

/// Commands understood by the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Поддерживаемые команды:")]
pub enum Command {
    /// Welcome message with the command list
    #[command(description = "Начать работу.")]
    Start,
    /// Command list
    #[command(description = "Показать список команд.")]
    Help,
    /// Breed lookup, argument is the breed name
    #[command(description = "Информация о породе кошки.")]
    Cat(String),
    /// Random astronomy picture of the day
    #[command(description = "Случайная космическая фотография дня от NASA.")]
    Apod,
    /// Random user profile
    #[command(description = "Случайный пользователь.")]
    User,
    /// Current weather, argument is the city name
    #[command(description = "Погода в указанном городе.")]
    Weather(String),
}

/// Returns the trimmed argument, or `None` when it is blank.
///
/// Handlers that require an argument answer with a usage hint instead of
/// touching any API when this returns `None`.
fn required_arg(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Logs the adapter error and sends the generic unavailability reply.
async fn report_unavailable(
    bot: &Bot,
    chat_id: ChatId,
    service: &str,
    err: &ApiError,
) -> Result<()> {
    error!(service, error = %err, "API request failed");
    bot.send_message(chat_id, captions::SERVICE_UNAVAILABLE)
        .await?;
    Ok(())
}

/// Sends a photo by URL with an HTML caption.
async fn send_photo(bot: &Bot, chat_id: ChatId, photo_url: &str, caption: String) -> Result<()> {
    let url = reqwest::Url::parse(photo_url)
        .map_err(|e| anyhow!("invalid photo URL {photo_url}: {e}"))?;
    bot.send_photo(chat_id, InputFile::url(url))
        .caption(caption)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handles `/start`: static welcome text, no API call.
///
/// # Errors
///
/// Returns an error if the reply cannot be sent.
pub async fn start(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, captions::WELCOME_TEXT)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handles `/help`: static command list, no API call.
///
/// # Errors
///
/// Returns an error if the reply cannot be sent.
pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, captions::HELP_TEXT)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handles `/cat <breed>`: breed photo plus description caption.
///
/// # Errors
///
/// Returns an error if a reply cannot be sent.
pub async fn cat(bot: Bot, msg: Message, api: Arc<ApiClients>, breed_name: String) -> Result<()> {
    let chat_id = msg.chat.id;
    let Some(breed_name) = required_arg(&breed_name) else {
        bot.send_message(chat_id, captions::CAT_USAGE).await?;
        return Ok(());
    };

    let breed = match api.cats.breed_info(breed_name).await {
        Ok(found) => found,
        Err(e) => return report_unavailable(&bot, chat_id, "thecatapi", &e).await,
    };
    let Some(breed) = breed else {
        info!(breed = breed_name, "unknown cat breed requested");
        bot.send_message(chat_id, captions::BREED_NOT_FOUND).await?;
        return Ok(());
    };

    let image = match api.cats.breed_image(&breed.id).await {
        Ok(found) => found,
        Err(e) => return report_unavailable(&bot, chat_id, "thecatapi", &e).await,
    };
    let Some(image) = image else {
        bot.send_message(chat_id, captions::BREED_IMAGE_UNAVAILABLE)
            .await?;
        return Ok(());
    };

    send_photo(&bot, chat_id, &image, captions::breed_caption(&breed)).await
}

/// Handles `/apod`: random astronomy picture with a truncated explanation.
///
/// # Errors
///
/// Returns an error if a reply cannot be sent.
pub async fn apod(bot: Bot, msg: Message, api: Arc<ApiClients>) -> Result<()> {
    let chat_id = msg.chat.id;
    let entry = match api.apod.fetch_random().await {
        Ok(entry) => entry,
        Err(e) => return report_unavailable(&bot, chat_id, "nasa-apod", &e).await,
    };

    let Some(url) = entry.url.clone() else {
        bot.send_message(chat_id, captions::APOD_UNAVAILABLE).await?;
        return Ok(());
    };

    if entry.is_image() {
        send_photo(&bot, chat_id, &url, captions::apod_caption(&entry)).await
    } else {
        // Videos cannot be sent as photos; fall back to a caption with a link
        let text = format!("{}\n\n{url}", captions::apod_caption(&entry));
        bot.send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }
}

/// Handles `/user`: one random profile with an avatar.
///
/// # Errors
///
/// Returns an error if a reply cannot be sent.
pub async fn user(bot: Bot, msg: Message, api: Arc<ApiClients>) -> Result<()> {
    let chat_id = msg.chat.id;
    let profile = match api.users.fetch().await {
        Ok(profile) => profile,
        Err(e) => return report_unavailable(&bot, chat_id, "randomuser", &e).await,
    };

    send_photo(
        &bot,
        chat_id,
        &profile.picture,
        captions::user_caption(&profile),
    )
    .await
}

/// Handles `/weather <city>`: current conditions with the condition icon.
///
/// # Errors
///
/// Returns an error if a reply cannot be sent.
pub async fn weather(bot: Bot, msg: Message, api: Arc<ApiClients>, city: String) -> Result<()> {
    let chat_id = msg.chat.id;
    let Some(city) = required_arg(&city) else {
        bot.send_message(chat_id, captions::WEATHER_USAGE).await?;
        return Ok(());
    };

    let snapshot = match api.weather.current(city).await {
        Ok(found) => found,
        Err(e) => return report_unavailable(&bot, chat_id, "openweathermap", &e).await,
    };
    let Some(snapshot) = snapshot else {
        info!(city, "weather lookup missed");
        bot.send_message(chat_id, captions::weather_not_found(city))
            .await?;
        return Ok(());
    };

    send_photo(
        &bot,
        chat_id,
        &snapshot.icon_url,
        captions::weather_caption(&snapshot),
    )
    .await
}
