//! Movie details and release dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::collection::BelongsToCollection;
use crate::types::company::{ProductionCompany, ProductionCountry, SpokenLanguage};
use crate::types::credits::Credits;
use crate::types::date;
use crate::types::external_ids::ExternalIds;
use crate::types::genre::Genre;
use crate::types::image::Images;
use crate::types::media::{AnyMedia, BackdropMedia, Movie, PosterMedia, RatedMedia};
use crate::types::page::PageResult;
use crate::types::translations::Translations;
use crate::types::video::Videos;
use crate::types::watch_providers::WatchProviderResult;

/// Response from `movie/{id}`.
///
/// The trailing `Option` fields are only populated when the matching
/// token was requested via `append_to_response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Release date.
    #[serde(default, with = "date")]
    pub release_date: Option<NaiveDate>,
    /// Resolved genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Budget in USD, 0 when unknown.
    #[serde(default)]
    pub budget: u64,
    /// Revenue in USD, 0 when unknown.
    #[serde(default)]
    pub revenue: u64,
    /// Release status, e.g. `Released`.
    #[serde(default)]
    pub status: Option<String>,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// IMDB id, e.g. `tt0133093`.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Collection membership.
    #[serde(default)]
    pub belongs_to_collection: Option<BelongsToCollection>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,

    /// Appended `credits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Appended `images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    /// Appended `external_ids`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Appended `translations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Translations>,
    /// Appended `videos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Videos>,
    /// Appended `watch/providers`.
    #[serde(
        default,
        rename = "watch/providers",
        skip_serializing_if = "Option::is_none"
    )]
    pub watch_providers: Option<WatchProviderResult>,
    /// Appended `release_dates`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_dates: Option<ReleaseDatesResult>,
    /// Appended `recommendations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<PageResult<Movie>>,
    /// Appended `similar`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar: Option<PageResult<Movie>>,
}

impl AnyMedia for MovieDetails {
    fn id(&self) -> u64 {
        self.id
    }
}

impl PosterMedia for MovieDetails {
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
}

impl BackdropMedia for MovieDetails {
    fn backdrop_path(&self) -> Option<&str> {
        self.backdrop_path.as_deref()
    }
}

impl RatedMedia for MovieDetails {
    fn vote_average(&self) -> Option<f64> {
        Some(self.vote_average)
    }

    fn vote_count(&self) -> Option<u32> {
        Some(self.vote_count)
    }
}

/// Response from `movie/{id}/release_dates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDatesResult {
    /// Owning movie id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Release dates grouped by country.
    #[serde(default)]
    pub results: Vec<CountryReleaseDates>,
}

/// Release dates within one country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryReleaseDates {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Releases in this country.
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

/// One release event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDate {
    /// Certification label, may be empty.
    #[serde(default)]
    pub certification: String,
    /// Language of this release (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Release timestamp (RFC 3339).
    pub release_date: String,
    /// Release kind (1 premiere .. 6 TV).
    #[serde(rename = "type")]
    pub release_type: u8,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Release window attached to the now-playing/upcoming pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    /// Latest release date in the window.
    #[serde(default, with = "date")]
    pub maximum: Option<NaiveDate>,
    /// Earliest release date in the window.
    #[serde(default, with = "date")]
    pub minimum: Option<NaiveDate>,
}

/// One page of movies plus the release window it was selected from
/// (`movie/now_playing`, `movie/upcoming`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatedMoviePage {
    /// Release window.
    pub dates: DateRange,
    /// Current page number (1-based).
    pub page: u32,
    /// Movies on this page.
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}
