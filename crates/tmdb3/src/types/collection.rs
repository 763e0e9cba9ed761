//! Collection summaries and details.

use serde::{Deserialize, Serialize};

use crate::types::media::Movie;

/// A collection as it appears in search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Collection ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `collection/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDetails {
    /// Collection ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Member movies.
    #[serde(default)]
    pub parts: Vec<Movie>,
}

/// Collection membership as embedded in movie details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BelongsToCollection {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}
