//! Localized translations.

use serde::{Deserialize, Serialize};

/// Response from the `/translations` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translations {
    /// Owning resource id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Available translations.
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// One localized translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Language code (ISO 639-1).
    pub iso_639_1: String,
    /// Native language name.
    pub name: String,
    /// English language name.
    pub english_name: String,
    /// Translated fields.
    pub data: TranslationData,
}

/// Translated field values; the populated subset depends on the
/// resource kind (movies carry `title`, shows and seasons carry `name`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationData {
    /// Translated movie title.
    #[serde(default)]
    pub title: Option<String>,
    /// Translated show/season/episode name.
    #[serde(default)]
    pub name: Option<String>,
    /// Translated overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Translated homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Translated tagline.
    #[serde(default)]
    pub tagline: Option<String>,
}
