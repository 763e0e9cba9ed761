//! People endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::Query;
use crate::types::external_ids::ExternalIds;
use crate::types::page::PageResult;
use crate::types::person::{
    Person, PersonDetails, PersonImages, PersonMovieCredits, PersonTvCredits,
};

impl TmdbClient {
    /// Fetches person details (`person/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the
    /// request, or the response cannot be decoded.
    #[instrument(skip_all, fields(id))]
    pub async fn person_details(&self, id: u64, language: Option<&str>) -> Result<PersonDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["person", &id.to_string()]), &query)
            .await
    }

    /// Fetches profile images for a person (`person/{id}/images`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn person_images(&self, id: u64) -> Result<PersonImages> {
        self.get_json(
            &join_path(&["person", &id.to_string(), "images"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches external ids for a person (`person/{id}/external_ids`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn person_external_ids(&self, id: u64) -> Result<ExternalIds> {
        self.get_json(
            &join_path(&["person", &id.to_string(), "external_ids"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches a person's movie credits (`person/{id}/movie_credits`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn person_movie_credits(
        &self,
        id: u64,
        language: Option<&str>,
    ) -> Result<PersonMovieCredits> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(
            &join_path(&["person", &id.to_string(), "movie_credits"]),
            &query,
        )
        .await
    }

    /// Fetches a person's TV credits (`person/{id}/tv_credits`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn person_tv_credits(
        &self,
        id: u64,
        language: Option<&str>,
    ) -> Result<PersonTvCredits> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(
            &join_path(&["person", &id.to_string(), "tv_credits"]),
            &query,
        )
        .await
    }

    /// Fetches the popular people list (`person/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn popular_people(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Person>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        self.get_json("person/popular", &query).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;
    use crate::types::media::MediaListItem;

    #[tokio::test]
    async fn test_popular_people_known_for_union_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/popular_people.json");

        Mock::given(method("GET"))
            .and(path("/3/person/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap();

        // Act
        let page = client.popular_people(None, None).await.unwrap();

        // Assert
        assert!(!page.results.is_empty());
        assert!(matches!(
            page.results[0].known_for[0],
            MediaListItem::Movie(_)
        ));
    }
}
