//! Reply texts and photo captions.
//!
//! All user-visible formatting lives here as pure functions so it can be
//! tested without a running bot. API-supplied text is HTML-escaped before
//! interpolation; the captions themselves use Telegram's HTML parse mode.

use crate::api::apod::Apod;
use crate::api::cats::Breed;
use crate::api::random_user::UserProfile;
use crate::api::weather::WeatherSnapshot;
use html_escape::encode_text;

/// Maximum number of characters of APOD explanation kept in a caption.
/// Telegram caps photo captions at 1024 characters.
pub const APOD_CAPTION_LIMIT: usize = 1000;

/// Static welcome text for `/start`
pub const WELCOME_TEXT: &str = "👋 <b>Привет!</b> Я бот с интеграцией различных API.\n\
Вот что я умею:\n\n\
🐱 /cat &lt;порода&gt; - Информация о породе кошки\n\
🌌 /apod - Случайная космическая фотография дня от NASA\n\
👤 /user - Случайный пользователь\n\
🌦 /weather &lt;город&gt; - Погода в указанном городе\n\
ℹ️ /help - Список команд";

/// Static command list for `/help`
pub const HELP_TEXT: &str = "ℹ️ <b>Доступные команды:</b>\n\n\
🐱 /cat &lt;порода&gt; - Информация о породе кошки (например: /cat siamese)\n\
🌌 /apod - Случайная космическая фотография дня от NASA\n\
👤 /user - Случайный пользователь с аватаром\n\
🌦 /weather &lt;город&gt; - Погода в указанном городе (например: /weather Москва)\n\
ℹ️ /help - Показать это сообщение";

/// Usage hint for `/cat` without an argument
pub const CAT_USAGE: &str = "Пожалуйста, укажите породу кошки. Например: /cat siamese";
/// Usage hint for `/weather` without an argument
pub const WEATHER_USAGE: &str = "Пожалуйста, укажите город. Например: /weather Москва";
/// Reply for an unknown breed name
pub const BREED_NOT_FOUND: &str = "😿 Порода не найдена. Попробуйте еще раз.";
/// Reply when the image search for a known breed comes back empty
pub const BREED_IMAGE_UNAVAILABLE: &str = "😿 Не удалось загрузить изображение кошки.";
/// Reply when the APOD entry has no media URL
pub const APOD_UNAVAILABLE: &str = "🌌 Не удалось получить изображение. Попробуйте позже.";
/// Generic reply for transport failures; details go to the log, not the chat
pub const SERVICE_UNAVAILABLE: &str = "⚠️ Сервис временно недоступен. Попробуйте позже.";

/// Reply for a city the weather service does not know
#[must_use]
pub fn weather_not_found(city: &str) -> String {
    format!(
        "☁️ Не удалось найти погоду для города: {}",
        encode_text(city)
    )
}

/// Truncates `text` to at most `max_chars` characters on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Uppercases the first character, the way weather descriptions arrive
/// all-lowercase from OpenWeatherMap.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Caption for a `/cat` photo reply
#[must_use]
pub fn breed_caption(breed: &Breed) -> String {
    format!(
        "🐱 <b>{}</b>\n\n\
         📖 <i>{}</i>\n\n\
         ⏳ Продолжительность жизни: {} лет\n\
         🌍 Происхождение: {}\n\
         😺 Темперамент: {}",
        encode_text(&breed.name),
        encode_text(&breed.description),
        encode_text(&breed.life_span),
        encode_text(breed.origin.as_deref().unwrap_or("неизвестно")),
        encode_text(breed.temperament.as_deref().unwrap_or("неизвестно")),
    )
}

/// Caption for an `/apod` photo reply; long explanations are cut at
/// [`APOD_CAPTION_LIMIT`] characters with an ellipsis marker
#[must_use]
pub fn apod_caption(apod: &Apod) -> String {
    let explanation = truncate_chars(&apod.explanation, APOD_CAPTION_LIMIT);
    let mut caption = format!(
        "🌌 <b>{}</b>\n\n{}",
        encode_text(&apod.title),
        encode_text(explanation)
    );
    if explanation.len() < apod.explanation.len() {
        caption.push_str("...");
    }
    caption
}

/// Caption for a `/user` photo reply
#[must_use]
pub fn user_caption(user: &UserProfile) -> String {
    format!(
        "👤 <b>{}</b>\n\
         🚻 Пол: {}\n\
         📧 Email: {}\n\
         📞 Телефон: {}\n\
         📍 Местоположение: {}",
        encode_text(&user.name),
        encode_text(&user.gender),
        encode_text(&user.email),
        encode_text(&user.phone),
        encode_text(&user.location),
    )
}

/// Caption for a `/weather` photo reply
#[must_use]
pub fn weather_caption(weather: &WeatherSnapshot) -> String {
    format!(
        "🌆 <b>{}</b>\n\n\
         🌡 Температура: {}°C\n\
         🤗 Ощущается как: {}°C\n\
         📝 Описание: {}\n\
         💧 Влажность: {}%\n\
         💨 Ветер: {} м/с",
        encode_text(&weather.city),
        weather.temp,
        weather.feels_like,
        encode_text(&capitalize(&weather.description)),
        weather.humidity,
        weather.wind_speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breed(description: &str) -> Breed {
        serde_json::from_str(&format!(
            r#"{{"id": "siam", "name": "Siamese", "description": {},
                "life_span": "12 - 15", "origin": "Thailand",
                "temperament": "Active"}}"#,
            serde_json::Value::String(description.to_string())
        ))
        .expect("breed literal must deserialize")
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let cyrillic = "привет".repeat(300); // 1800 chars, 2 bytes each
        let cut = truncate_chars(&cyrillic, 1000);
        assert_eq!(cut.chars().count(), 1000);

        let short = "короткий текст";
        assert_eq!(truncate_chars(short, 1000), short);
    }

    #[test]
    fn apod_caption_truncates_to_limit_with_ellipsis() {
        let apod = Apod {
            title: "Orion".to_string(),
            explanation: "x".repeat(1500),
            url: Some("https://example.com/x.jpg".to_string()),
            media_type: Some("image".to_string()),
        };
        let caption = apod_caption(&apod);
        assert!(caption.ends_with("..."));
        let body = caption
            .split_once("\n\n")
            .map(|(_, b)| b)
            .expect("caption has a body");
        assert_eq!(body.chars().count(), 1000 + 3);
    }

    #[test]
    fn apod_caption_leaves_short_explanations_alone() {
        let apod = Apod {
            title: "Orion".to_string(),
            explanation: "Short enough.".to_string(),
            url: None,
            media_type: None,
        };
        let caption = apod_caption(&apod);
        assert!(caption.contains("Short enough."));
        assert!(!caption.ends_with("..."));
    }

    #[test]
    fn api_text_is_html_escaped() {
        let tricky = breed("1 < 2 & <script>alert()</script>");
        let caption = breed_caption(&tricky);
        assert!(!caption.contains("<script>"));
        assert!(caption.contains("&lt;script&gt;"));
        // Our own markup survives
        assert!(caption.contains("<b>Siamese</b>"));
    }

    #[test]
    fn capitalize_handles_cyrillic_and_empty() {
        assert_eq!(capitalize("пасмурно"), "Пасмурно");
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn weather_caption_contains_all_fields() {
        let snapshot = crate::api::weather::WeatherSnapshot {
            city: "Москва".to_string(),
            temp: 7.3,
            feels_like: 4.8,
            description: "пасмурно".to_string(),
            humidity: 81,
            wind_speed: 3.6,
            icon_url: "https://openweathermap.org/img/wn/04d@2x.png".to_string(),
        };
        let caption = weather_caption(&snapshot);
        assert!(caption.contains("<b>Москва</b>"));
        assert!(caption.contains("7.3°C"));
        assert!(caption.contains("Пасмурно"));
        assert!(caption.contains("81%"));
        assert!(caption.contains("3.6 м/с"));
    }
}
