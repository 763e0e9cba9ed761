//! Episode models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::credits::{Cast, Credits, Crew};
use crate::types::date;
use crate::types::external_ids::ExternalIds;
use crate::types::image::Images;
use crate::types::media::{AnyMedia, RatedMedia, StillMedia};

/// An episode as embedded in season details and show details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Air date.
    #[serde(default, with = "date")]
    pub air_date: Option<NaiveDate>,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Owning series id, present in some list contexts.
    #[serde(default)]
    pub show_id: Option<u64>,
    /// Episode kind, e.g. `standard`, `finale`.
    #[serde(default)]
    pub episode_type: Option<String>,
    /// Production code.
    #[serde(default)]
    pub production_code: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

/// Response from `tv/{id}/season/{n}/episode/{m}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeDetails {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Air date.
    #[serde(default, with = "date")]
    pub air_date: Option<NaiveDate>,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Production code.
    #[serde(default)]
    pub production_code: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Episode-level crew.
    #[serde(default)]
    pub crew: Vec<Crew>,
    /// Guest cast.
    #[serde(default)]
    pub guest_stars: Vec<Cast>,

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

impl AnyMedia for Episode {
    fn id(&self) -> u64 {
        self.id
    }
}

impl StillMedia for Episode {
    fn still_path(&self) -> Option<&str> {
        self.still_path.as_deref()
    }
}

impl RatedMedia for Episode {
    fn vote_average(&self) -> Option<f64> {
        Some(self.vote_average)
    }

    fn vote_count(&self) -> Option<u32> {
        Some(self.vote_count)
    }
}

impl AnyMedia for EpisodeDetails {
    fn id(&self) -> u64 {
        self.id
    }
}

impl StillMedia for EpisodeDetails {
    fn still_path(&self) -> Option<&str> {
        self.still_path.as_deref()
    }
}

impl RatedMedia for EpisodeDetails {
    fn vote_average(&self) -> Option<f64> {
        Some(self.vote_average)
    }

    fn vote_count(&self) -> Option<u32> {
        Some(self.vote_count)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_episode_details_fixture_decodes() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/episode_details_1396_1_1.json");

        // Act
        let details: EpisodeDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.episode_number, 1);
        assert_eq!(details.season_number, 1);
        assert_eq!(details.name, "Pilot");
        assert!(details.crew.iter().any(|c| c.job == "Director"));
    }
}
