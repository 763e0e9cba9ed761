//! API configuration (image base URLs, size tokens, change keys).

use serde::{Deserialize, Serialize};

/// Response from `configuration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Image URL configuration.
    pub images: ImagesConfiguration,
    /// Fields tracked by the changes endpoints.
    #[serde(default)]
    pub change_keys: Vec<String>,
}

/// Image base URLs and the size tokens valid for each image kind.
///
/// Combine `secure_base_url` + a size token + a model's path fragment to
/// form a displayable URL (see [`crate::types::image::image_url`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfiguration {
    /// Plain HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Valid backdrop size tokens.
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    /// Valid logo size tokens.
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    /// Valid poster size tokens.
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Valid profile size tokens.
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    /// Valid still size tokens.
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

/// An entry from `configuration/countries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// English country name.
    pub english_name: String,
    /// Localized country name.
    #[serde(default)]
    pub native_name: Option<String>,
}

/// An entry from `configuration/languages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    /// Language code (ISO 639-1).
    pub iso_639_1: String,
    /// English language name.
    pub english_name: String,
    /// Native language name, may be empty.
    #[serde(default)]
    pub name: String,
}
