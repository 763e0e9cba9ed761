//! External ids and the find-by-external-id result.

use serde::{Deserialize, Serialize};

use crate::types::episode::Episode;
use crate::types::media::{Movie, TvShow};
use crate::types::person::Person;
use crate::types::show::SeasonSummary;

/// Ids the resource carries on other databases and social networks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Owning resource id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// IMDB id, e.g. `tt0133093`.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// TheTVDB id.
    #[serde(default)]
    pub tvdb_id: Option<u64>,
    /// Wikidata id, e.g. `Q83495`.
    #[serde(default)]
    pub wikidata_id: Option<String>,
    /// Facebook handle.
    #[serde(default)]
    pub facebook_id: Option<String>,
    /// Instagram handle.
    #[serde(default)]
    pub instagram_id: Option<String>,
    /// Twitter/X handle.
    #[serde(default)]
    pub twitter_id: Option<String>,
    /// Legacy Freebase MID.
    #[serde(default)]
    pub freebase_mid: Option<String>,
}

/// External database to resolve in `find/{external_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalSource {
    /// IMDB ids (`tt...` / `nm...`).
    ImdbId,
    /// TheTVDB ids.
    TvdbId,
    /// Wikidata ids.
    WikidataId,
    /// Facebook handles.
    FacebookId,
    /// Instagram handles.
    InstagramId,
    /// Twitter/X handles.
    TwitterId,
}

impl ExternalSource {
    /// `external_source` parameter value as the API expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImdbId => "imdb_id",
            Self::TvdbId => "tvdb_id",
            Self::WikidataId => "wikidata_id",
            Self::FacebookId => "facebook_id",
            Self::InstagramId => "instagram_id",
            Self::TwitterId => "twitter_id",
        }
    }
}

/// Response from `find/{external_id}`: every TMDB entity kind the
/// external id resolved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindResult {
    /// Matching movies.
    #[serde(default)]
    pub movie_results: Vec<Movie>,
    /// Matching TV shows.
    #[serde(default)]
    pub tv_results: Vec<TvShow>,
    /// Matching people.
    #[serde(default)]
    pub person_results: Vec<Person>,
    /// Matching TV seasons.
    #[serde(default)]
    pub tv_season_results: Vec<SeasonSummary>,
    /// Matching TV episodes.
    #[serde(default)]
    pub tv_episode_results: Vec<Episode>,
}
