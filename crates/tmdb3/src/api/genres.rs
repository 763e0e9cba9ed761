//! Genre list endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::TmdbClient;
use crate::params::Query;
use crate::types::genre::GenreList;

impl TmdbClient {
    /// Fetches the official movie genres (`genre/movie/list`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn movie_genres(&self, language: Option<&str>) -> Result<GenreList> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json("genre/movie/list", &query).await
    }

    /// Fetches the official TV genres (`genre/tv/list`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn tv_genres(&self, language: Option<&str>) -> Result<GenreList> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json("genre/tv/list", &query).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;

    #[tokio::test]
    async fn test_movie_genres_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/genres_movie.json");

        Mock::given(method("GET"))
            .and(path("/3/genre/movie/list"))
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
        let list = client.movie_genres(None).await.unwrap();

        // Assert
        assert!(list.genres.iter().any(|g| g.id == 28 && g.name == "Action"));
    }
}
