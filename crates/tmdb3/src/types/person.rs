//! People and person credits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::date;
use crate::types::image::Image;
use crate::types::media::{AnyMedia, MediaListItem, ProfileMedia};

/// A person as it appears in list responses (`person/popular`, search).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Original (untranslated) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Department the person is primarily known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Works the person is known for; exercises the media union.
    #[serde(default)]
    pub known_for: Vec<MediaListItem>,
    /// Popularity score.
    pub popularity: f64,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u8>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Response from `person/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Alternative names.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// Biography text.
    #[serde(default)]
    pub biography: Option<String>,
    /// Birth date.
    #[serde(default, with = "date")]
    pub birthday: Option<NaiveDate>,
    /// Death date, absent while alive.
    #[serde(default, with = "date")]
    pub deathday: Option<NaiveDate>,
    /// Department the person is primarily known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// IMDB id, e.g. `nm0000206`.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Gender code.
    pub gender: Option<u8>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Response from `person/{id}/images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonImages {
    /// Owning person id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Profile images.
    #[serde(default)]
    pub profiles: Vec<Image>,
}

/// Response from `person/{id}/movie_credits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMovieCredits {
    /// Owning person id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Movies the person acted in.
    #[serde(default)]
    pub cast: Vec<PersonMovieCast>,
    /// Movies the person crewed on.
    #[serde(default)]
    pub crew: Vec<PersonMovieCrew>,
}

/// An acting credit on a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMovieCast {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit record ID.
    pub credit_id: String,
    /// Release date.
    #[serde(default, with = "date")]
    pub release_date: Option<NaiveDate>,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
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

/// A crew credit on a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMovieCrew {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Job title.
    pub job: String,
    /// Department.
    pub department: String,
    /// Credit record ID.
    pub credit_id: String,
    /// Release date.
    #[serde(default, with = "date")]
    pub release_date: Option<NaiveDate>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `person/{id}/tv_credits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonTvCredits {
    /// Owning person id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Shows the person acted in.
    #[serde(default)]
    pub cast: Vec<PersonTvCast>,
    /// Shows the person crewed on.
    #[serde(default)]
    pub crew: Vec<PersonTvCrew>,
}

/// An acting credit on a show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonTvCast {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit record ID.
    pub credit_id: String,
    /// Episodes featuring this credit.
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// First air date.
    #[serde(default, with = "date")]
    pub first_air_date: Option<NaiveDate>,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Origin countries.
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// A crew credit on a show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonTvCrew {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Job title.
    pub job: String,
    /// Department.
    pub department: String,
    /// Credit record ID.
    pub credit_id: String,
    /// Episodes covered by this credit.
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// First air date.
    #[serde(default, with = "date")]
    pub first_air_date: Option<NaiveDate>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

impl AnyMedia for Person {
    fn id(&self) -> u64 {
        self.id
    }
}

impl ProfileMedia for Person {
    fn profile_path(&self) -> Option<&str> {
        self.profile_path.as_deref()
    }
}

impl AnyMedia for PersonDetails {
    fn id(&self) -> u64 {
        self.id
    }
}

impl ProfileMedia for PersonDetails {
    fn profile_path(&self) -> Option<&str> {
        self.profile_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::types::page::PageResult;

    #[test]
    fn test_person_details_fixture_decodes() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_details_6384.json");

        // Act
        let details: PersonDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.id, 6384);
        assert_eq!(details.name, "Keanu Reeves");
        assert_eq!(
            details.birthday,
            Some(NaiveDate::from_ymd_opt(1964, 9, 2).unwrap())
        );
        assert_eq!(details.deathday, None);
    }

    #[test]
    fn test_popular_people_known_for_exercises_the_union() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/popular_people.json");

        // Act
        let page: PageResult<Person> = serde_json::from_str(json).unwrap();

        // Assert
        let first = &page.results[0];
        assert!(!first.known_for.is_empty());
        assert!(matches!(first.known_for[0], MediaListItem::Movie(_)));
    }
}
