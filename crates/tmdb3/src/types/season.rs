//! Season models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::credits::Credits;
use crate::types::date;
use crate::types::episode::Episode;
use crate::types::external_ids::ExternalIds;
use crate::types::image::Images;
use crate::types::media::{AnyMedia, PosterMedia};

/// Response from `tv/{id}/season/{n}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonDetails {
    /// Season object id in the changes system.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub change_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Season name.
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// First air date of the season.
    #[serde(default, with = "date")]
    pub air_date: Option<NaiveDate>,
    /// Season number (0 for specials).
    pub season_number: u32,
    /// Episodes in this season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,

    /// Appended `credits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Appended `images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    /// Appended `external_ids`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
}

impl AnyMedia for SeasonDetails {
    fn id(&self) -> u64 {
        self.id
    }
}

impl PosterMedia for SeasonDetails {
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_season_details_fixture_decodes() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/season_details_1396_1.json");

        // Act
        let season: SeasonDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(season.season_number, 1);
        assert!(!season.episodes.is_empty());
        assert_eq!(season.episodes[0].episode_number, 1);
    }
}
