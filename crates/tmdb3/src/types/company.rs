//! Production companies, countries, and spoken languages.

use serde::{Deserialize, Serialize};

/// A production company attached to a movie or show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1), may be empty.
    #[serde(default)]
    pub origin_country: String,
}

/// A production country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCountry {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// English country name.
    pub name: String,
}

/// A spoken language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    /// Language code (ISO 639-1).
    pub iso_639_1: String,
    /// Native language name.
    pub name: String,
    /// English language name.
    #[serde(default)]
    pub english_name: Option<String>,
}
