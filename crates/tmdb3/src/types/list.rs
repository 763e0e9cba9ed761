//! User-created lists.

use serde::{Deserialize, Serialize};

use crate::types::media::MediaListItem;

/// Response from `list/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDetails {
    /// List ID.
    pub id: u64,
    /// List name.
    pub name: String,
    /// List description.
    #[serde(default)]
    pub description: String,
    /// Creator's display name.
    #[serde(default)]
    pub created_by: String,
    /// List language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Number of items on the list.
    pub item_count: u32,
    /// Users who favorited the list.
    #[serde(default)]
    pub favorite_count: u32,
    /// List items; each entry carries a `media_type` tag.
    #[serde(default)]
    pub items: Vec<MediaListItem>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Request body for `list` creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateList {
    /// List name.
    pub name: String,
    /// List description.
    pub description: String,
    /// List language (ISO 639-1).
    pub language: String,
}

/// Response from `list` creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListResponse {
    /// TMDB-internal status code.
    pub status_code: i32,
    /// Human-readable status message.
    pub status_message: String,
    /// Success flag.
    #[serde(default)]
    pub success: Option<bool>,
    /// Id of the created list.
    pub list_id: u64,
}
