//! Videos (trailers, clips).

use serde::{Deserialize, Serialize};

/// Response from the `/videos` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Videos {
    /// Owning resource id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Video entries.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A hosted video reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Video record ID.
    pub id: String,
    /// Language code (ISO 639-1).
    pub iso_639_1: String,
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Provider-side video key, e.g. a YouTube id.
    pub key: String,
    /// Video title.
    pub name: String,
    /// Hosting site, e.g. `YouTube`.
    pub site: String,
    /// Resolution, e.g. `1080`.
    pub size: u32,
    /// Kind, e.g. `Trailer`, `Teaser`.
    #[serde(rename = "type")]
    pub video_type: String,
    /// Official upload flag.
    #[serde(default)]
    pub official: bool,
    /// Publication timestamp (RFC 3339).
    #[serde(default)]
    pub published_at: Option<String>,
}
