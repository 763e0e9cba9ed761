//! Account details and favorite/watchlist mutation bodies.

use serde::{Deserialize, Serialize};

use crate::types::media::MediaType;

/// Response from `account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: u64,
    /// Username.
    pub username: String,
    /// Display name, may be empty.
    #[serde(default)]
    pub name: String,
    /// Preferred language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Preferred country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    /// Adult content preference.
    #[serde(default)]
    pub include_adult: bool,
    /// Avatar sources.
    #[serde(default)]
    pub avatar: Option<Avatar>,
}

/// Avatar sources for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Gravatar source.
    #[serde(default)]
    pub gravatar: Option<Gravatar>,
    /// TMDB-hosted avatar.
    #[serde(default)]
    pub tmdb: Option<TmdbAvatar>,
}

/// Gravatar hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gravatar {
    /// Gravatar hash.
    #[serde(default)]
    pub hash: Option<String>,
}

/// TMDB-hosted avatar path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbAvatar {
    /// Avatar image path.
    #[serde(default)]
    pub avatar_path: Option<String>,
}

/// Request body for `account/{id}/favorite`.
#[derive(Debug, Clone, Serialize)]
pub struct MarkFavorite {
    /// Kind of the target media (`movie` or `tv`).
    pub media_type: MediaType,
    /// Id of the target media.
    pub media_id: u64,
    /// `true` marks, `false` unmarks.
    pub favorite: bool,
}

/// Request body for `account/{id}/watchlist`.
#[derive(Debug, Clone, Serialize)]
pub struct MarkWatchlist {
    /// Kind of the target media (`movie` or `tv`).
    pub media_type: MediaType,
    /// Id of the target media.
    pub media_id: u64,
    /// `true` adds, `false` removes.
    pub watchlist: bool,
}

/// The TMDB status envelope.
///
/// Returned by mutation endpoints on success and carried inside
/// [`crate::TmdbError::Api`] when a request is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// TMDB-internal status code (not the HTTP status).
    pub status_code: i32,
    /// Human-readable status message.
    pub status_message: String,
    /// Success flag, absent on some responses.
    #[serde(default)]
    pub success: Option<bool>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_envelope_decodes() {
        // Arrange
        let json = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let status: StatusResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(status.status_code, 7);
        assert_eq!(status.success, Some(false));
        assert!(status.status_message.contains("Invalid API key"));
    }

    #[test]
    fn test_mark_favorite_serializes_the_documented_body() {
        // Arrange
        let body = MarkFavorite {
            media_type: MediaType::Movie,
            media_id: 603,
            favorite: true,
        };

        // Act
        let json = serde_json::to_value(&body).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({"media_type":"movie","media_id":603,"favorite":true})
        );
    }
}
