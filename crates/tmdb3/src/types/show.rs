//! TV show details, networks, and content ratings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::company::{ProductionCompany, ProductionCountry, SpokenLanguage};
use crate::types::credits::{AggregateCredits, Credits};
use crate::types::date;
use crate::types::episode::Episode;
use crate::types::external_ids::ExternalIds;
use crate::types::genre::Genre;
use crate::types::image::Images;
use crate::types::media::{AnyMedia, BackdropMedia, PosterMedia, RatedMedia, TvShow};
use crate::types::page::PageResult;
use crate::types::translations::Translations;
use crate::types::watch_providers::WatchProviderResult;

/// Response from `tv/{id}`.
///
/// The trailing `Option` fields are only populated when the matching
/// token was requested via `append_to_response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// First air date.
    #[serde(default, with = "date")]
    pub first_air_date: Option<NaiveDate>,
    /// Last air date.
    #[serde(default, with = "date")]
    pub last_air_date: Option<NaiveDate>,
    /// Still in production.
    #[serde(default)]
    pub in_production: bool,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Resolved genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Spoken language codes.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Broadcasting networks.
    #[serde(default)]
    pub networks: Vec<Network>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Production status, e.g. `Returning Series`.
    #[serde(default)]
    pub status: Option<String>,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Show kind, e.g. `Scripted`.
    #[serde(default, rename = "type")]
    pub show_type: Option<String>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Season summaries.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Most recently aired episode.
    #[serde(default)]
    pub last_episode_to_air: Option<Episode>,
    /// Next scheduled episode.
    #[serde(default)]
    pub next_episode_to_air: Option<Episode>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,

    /// Appended `credits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Appended `aggregate_credits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_credits: Option<AggregateCredits>,
    /// Appended `images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    /// Appended `external_ids`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Appended `translations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Translations>,
    /// Appended `content_ratings`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ratings: Option<ContentRatings>,
    /// Appended `watch/providers`.
    #[serde(
        default,
        rename = "watch/providers",
        skip_serializing_if = "Option::is_none"
    )]
    pub watch_providers: Option<WatchProviderResult>,
    /// Appended `recommendations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<PageResult<TvShow>>,
}

impl AnyMedia for TvShowDetails {
    fn id(&self) -> u64 {
        self.id
    }
}

impl PosterMedia for TvShowDetails {
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
}

impl BackdropMedia for TvShowDetails {
    fn backdrop_path(&self) -> Option<&str> {
        self.backdrop_path.as_deref()
    }
}

impl RatedMedia for TvShowDetails {
    fn vote_average(&self) -> Option<f64> {
        Some(self.vote_average)
    }

    fn vote_count(&self) -> Option<u32> {
        Some(self.vote_count)
    }
}

/// A broadcasting network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Network ID.
    pub id: u64,
    /// Network name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1), may be empty.
    #[serde(default)]
    pub origin_country: String,
}

/// A season as summarized inside show details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSummary {
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
    /// Number of episodes.
    pub episode_count: u32,
    /// Season number (0 for specials).
    pub season_number: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Response from `tv/{id}/content_ratings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRatings {
    /// Owning series id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Ratings per country.
    #[serde(default)]
    pub results: Vec<ContentRating>,
}

/// One country's content rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRating {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Rating label, e.g. `TV-MA`.
    pub rating: String,
    /// Rating descriptors.
    #[serde(default)]
    pub descriptors: Vec<String>,
}
