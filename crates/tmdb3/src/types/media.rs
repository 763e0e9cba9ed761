//! The media union, list items, and shared capability traits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::date;

/// Variant discriminant for polymorphic media payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// A movie.
    Movie,
    /// A TV show.
    Tv,
    /// A TV season.
    Season,
    /// A TV episode.
    Episode,
}

impl MediaType {
    /// External tag value as the API expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Season => "season",
            Self::Episode => "episode",
        }
    }
}

/// Anything with a TMDB id.
///
/// Ids are unique per variant, not across variants: movie 603 and show
/// 603 are different entities.
pub trait AnyMedia {
    /// TMDB id of this entity.
    fn id(&self) -> u64;
}

/// Anything carrying an optional backdrop path fragment.
pub trait BackdropMedia {
    /// Opaque backdrop path fragment, e.g. `/abc.jpg`.
    fn backdrop_path(&self) -> Option<&str>;
}

/// Anything carrying an optional poster path fragment.
pub trait PosterMedia {
    /// Opaque poster path fragment.
    fn poster_path(&self) -> Option<&str>;
}

/// Anything carrying an optional profile path fragment (people).
pub trait ProfileMedia {
    /// Opaque profile path fragment.
    fn profile_path(&self) -> Option<&str>;
}

/// Anything carrying an optional episode still path fragment.
pub trait StillMedia {
    /// Opaque still path fragment.
    fn still_path(&self) -> Option<&str>;
}

/// Anything with community rating signals.
pub trait RatedMedia {
    /// Average vote, when the variant carries one.
    fn vote_average(&self) -> Option<f64>;
    /// Vote count, when the variant carries one.
    fn vote_count(&self) -> Option<u32>;
}

/// A movie as it appears in list responses (search, discover, pages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text, may be empty.
    #[serde(default)]
    pub overview: String,
    /// Release date (`YYYY-MM-DD`, `""`, or null).
    #[serde(default, with = "date")]
    pub release_date: Option<NaiveDate>,
    /// Genre IDs, opaque references.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
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
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// A TV show as it appears in list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShow {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text, may be empty.
    #[serde(default)]
    pub overview: String,
    /// First air date (`YYYY-MM-DD`, `""`, or null).
    #[serde(default, with = "date")]
    pub first_air_date: Option<NaiveDate>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Genre IDs, opaque references.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// A listable movie or show, discriminated by the `media_type` tag.
///
/// Multi-search and trending payloads mix variants in one page; the tag
/// selects the variant at decode time. An unrecognized tag (for example
/// `person`) is a decode error, never a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum MediaListItem {
    /// A movie list entry.
    Movie(Movie),
    /// A TV show list entry.
    Tv(TvShow),
}

impl AnyMedia for Movie {
    fn id(&self) -> u64 {
        self.id
    }
}

impl PosterMedia for Movie {
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
}

impl BackdropMedia for Movie {
    fn backdrop_path(&self) -> Option<&str> {
        self.backdrop_path.as_deref()
    }
}

impl RatedMedia for Movie {
    fn vote_average(&self) -> Option<f64> {
        Some(self.vote_average)
    }

    fn vote_count(&self) -> Option<u32> {
        Some(self.vote_count)
    }
}

impl AnyMedia for TvShow {
    fn id(&self) -> u64 {
        self.id
    }
}

impl PosterMedia for TvShow {
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
}

impl BackdropMedia for TvShow {
    fn backdrop_path(&self) -> Option<&str> {
        self.backdrop_path.as_deref()
    }
}

impl RatedMedia for TvShow {
    fn vote_average(&self) -> Option<f64> {
        Some(self.vote_average)
    }

    fn vote_count(&self) -> Option<u32> {
        Some(self.vote_count)
    }
}

impl AnyMedia for MediaListItem {
    fn id(&self) -> u64 {
        match self {
            Self::Movie(movie) => movie.id,
            Self::Tv(show) => show.id,
        }
    }
}

impl PosterMedia for MediaListItem {
    fn poster_path(&self) -> Option<&str> {
        match self {
            Self::Movie(movie) => movie.poster_path.as_deref(),
            Self::Tv(show) => show.poster_path.as_deref(),
        }
    }
}

impl BackdropMedia for MediaListItem {
    fn backdrop_path(&self) -> Option<&str> {
        match self {
            Self::Movie(movie) => movie.backdrop_path.as_deref(),
            Self::Tv(show) => show.backdrop_path.as_deref(),
        }
    }
}

impl RatedMedia for MediaListItem {
    fn vote_average(&self) -> Option<f64> {
        match self {
            Self::Movie(movie) => Some(movie.vote_average),
            Self::Tv(show) => Some(show.vote_average),
        }
    }

    fn vote_count(&self) -> Option<u32> {
        match self {
            Self::Movie(movie) => Some(movie.vote_count),
            Self::Tv(show) => Some(show.vote_count),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::types::page::PageResult;

    #[test]
    fn test_media_type_tag_values() {
        // Arrange & Act & Assert
        assert_eq!(MediaType::Movie.as_str(), "movie");
        assert_eq!(MediaType::Tv.as_str(), "tv");
        assert_eq!(
            serde_json::to_string(&MediaType::Episode).unwrap(),
            r#""episode""#
        );
    }

    #[test]
    fn test_multi_page_dispatches_on_media_type() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_multi.json");

        // Act
        let page: PageResult<MediaListItem> = serde_json::from_str(json).unwrap();

        // Assert
        assert!(matches!(page.results[0], MediaListItem::Movie(_)));
        assert!(matches!(page.results[1], MediaListItem::Tv(_)));
    }

    #[test]
    fn test_person_tag_is_a_decode_error() {
        // Arrange
        let json = r#"{"media_type":"person","id":6384,"name":"Keanu Reeves","popularity":45.2}"#;

        // Act
        let result = serde_json::from_str::<MediaListItem>(json);

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("person"));
    }

    #[test]
    fn test_capability_traits_are_usable_across_variants() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_multi.json");
        let page: PageResult<MediaListItem> = serde_json::from_str(json).unwrap();

        // Act
        let ids: Vec<u64> = page.results.iter().map(AnyMedia::id).collect();

        // Assert
        assert!(ids.iter().all(|id| *id > 0));
        assert!(page.results[0].vote_count().is_some());
    }

    #[test]
    fn test_movie_round_trips_external_field_names() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_movie_matrix.json");
        let page: PageResult<Movie> = serde_json::from_str(json).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();

        // Act
        let reencoded = serde_json::to_value(&page).unwrap();

        // Assert: every externally-named field survives by name and value
        let original_first = original["results"][0].as_object().unwrap();
        let reencoded_first = reencoded["results"][0].as_object().unwrap();
        for (key, value) in original_first {
            assert_eq!(reencoded_first.get(key), Some(value), "field {key} diverged");
        }
    }
}
