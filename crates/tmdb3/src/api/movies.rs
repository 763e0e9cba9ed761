//! Movie endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::{AppendResponse, Query};
use crate::types::credits::Credits;
use crate::types::external_ids::ExternalIds;
use crate::types::image::Images;
use crate::types::media::Movie;
use crate::types::movie::{DatedMoviePage, MovieDetails, ReleaseDatesResult};
use crate::types::page::PageResult;
use crate::types::translations::Translations;
use crate::types::video::Videos;
use crate::types::watch_providers::WatchProviderResult;

impl TmdbClient {
    /// Fetches movie details (`movie/{id}`), optionally inlining the
    /// given sub-resources via `append_to_response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the
    /// request, or the response cannot be decoded.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_details(
        &self,
        id: u64,
        language: Option<&str>,
        append: &[AppendResponse],
    ) -> Result<MovieDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_append(append);
        self.get_json(&join_path(&["movie", &id.to_string()]), &query)
            .await
    }

    /// Fetches cast and crew for a movie (`movie/{id}/credits`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_credits(&self, id: u64, language: Option<&str>) -> Result<Credits> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["movie", &id.to_string(), "credits"]), &query)
            .await
    }

    /// Fetches external ids for a movie (`movie/{id}/external_ids`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_external_ids(&self, id: u64) -> Result<ExternalIds> {
        self.get_json(
            &join_path(&["movie", &id.to_string(), "external_ids"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches images for a movie (`movie/{id}/images`).
    ///
    /// `include_image_language` widens the language filter, e.g.
    /// `"en,null"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_images(
        &self,
        id: u64,
        include_image_language: Option<&str>,
    ) -> Result<Images> {
        let mut query = Query::new();
        query.push_opt("include_image_language", include_image_language);
        self.get_json(&join_path(&["movie", &id.to_string(), "images"]), &query)
            .await
    }

    /// Fetches translations for a movie (`movie/{id}/translations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_translations(&self, id: u64) -> Result<Translations> {
        self.get_json(
            &join_path(&["movie", &id.to_string(), "translations"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches videos for a movie (`movie/{id}/videos`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_videos(&self, id: u64, language: Option<&str>) -> Result<Videos> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["movie", &id.to_string(), "videos"]), &query)
            .await
    }

    /// Fetches watch provider availability for a movie
    /// (`movie/{id}/watch/providers`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_watch_providers(&self, id: u64) -> Result<WatchProviderResult> {
        self.get_json(
            &join_path(&["movie", &id.to_string(), "watch", "providers"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches per-country release dates and certifications
    /// (`movie/{id}/release_dates`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_release_dates(&self, id: u64) -> Result<ReleaseDatesResult> {
        self.get_json(
            &join_path(&["movie", &id.to_string(), "release_dates"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches recommendations for a movie
    /// (`movie/{id}/recommendations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn movie_recommendations(
        &self,
        id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Movie>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        self.get_json(
            &join_path(&["movie", &id.to_string(), "recommendations"]),
            &query,
        )
        .await
    }

    /// Fetches movies similar to the given one (`movie/{id}/similar`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn similar_movies(
        &self,
        id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Movie>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        self.get_json(&join_path(&["movie", &id.to_string(), "similar"]), &query)
            .await
    }

    /// Fetches the popular movies list (`movie/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn popular_movies(
        &self,
        language: Option<&str>,
        region: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Movie>> {
        self.movie_list("popular", language, region, page).await
    }

    /// Fetches the top rated movies list (`movie/top_rated`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn top_rated_movies(
        &self,
        language: Option<&str>,
        region: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Movie>> {
        self.movie_list("top_rated", language, region, page).await
    }

    /// Fetches movies currently in theatres (`movie/now_playing`); the
    /// page carries the release window it was selected from.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn now_playing_movies(
        &self,
        language: Option<&str>,
        region: Option<&str>,
        page: Option<u32>,
    ) -> Result<DatedMoviePage> {
        let query = self.movie_list_query(language, region, page);
        self.get_json("movie/now_playing", &query).await
    }

    /// Fetches upcoming movies (`movie/upcoming`); the page carries the
    /// release window it was selected from.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn upcoming_movies(
        &self,
        language: Option<&str>,
        region: Option<&str>,
        page: Option<u32>,
    ) -> Result<DatedMoviePage> {
        let query = self.movie_list_query(language, region, page);
        self.get_json("movie/upcoming", &query).await
    }

    fn movie_list_query(
        &self,
        language: Option<&str>,
        region: Option<&str>,
        page: Option<u32>,
    ) -> Query {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("region", self.region_or_default(region));
        query.push_opt("page", page.map(|p| p.to_string()));
        query
    }

    async fn movie_list(
        &self,
        list: &str,
        language: Option<&str>,
        region: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Movie>> {
        let query = self.movie_list_query(language, region, page);
        self.get_json(&join_path(&["movie", list]), &query).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;
    use crate::params::AppendResponse;

    fn client_for(mock_server: &MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_movie_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/movie_details_603.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/603"))
            .and(query_param_is_missing("language"))
            .and(query_param_is_missing("append_to_response"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let details = client.movie_details(603, None, &[]).await.unwrap();

        // Assert
        assert_eq!(details.id, 603);
        assert_eq!(details.title, "The Matrix");
    }

    #[tokio::test]
    async fn test_movie_details_sends_append_to_response() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/movie_details_603_appended.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/603"))
            .and(query_param("append_to_response", "credits,images"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let details = client
            .movie_details(
                603,
                Some("en-US"),
                &[AppendResponse::Credits, AppendResponse::Images],
            )
            .await
            .unwrap();

        // Assert
        assert!(details.credits.is_some());
        assert!(details.images.is_some());
    }

    #[tokio::test]
    async fn test_popular_movies_omits_absent_region() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/popular_movies_page.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/popular"))
            .and(query_param_is_missing("region"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let page = client.popular_movies(None, None, Some(1)).await.unwrap();

        // Assert: one page decoded, nothing fetched page 2 (expect(1))
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.results.len(), 20);
    }

    #[tokio::test]
    async fn test_now_playing_decodes_the_date_window() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/now_playing.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/now_playing"))
            .and(query_param("region", "US"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let page = client
            .now_playing_movies(None, Some("US"), None)
            .await
            .unwrap();

        // Assert
        assert!(page.dates.minimum.is_some());
        assert!(!page.results.is_empty());
    }

    #[tokio::test]
    async fn test_movie_watch_providers_path_has_two_segments() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/watch_providers_603.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/603/watch/providers"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let providers = client.movie_watch_providers(603).await.unwrap();

        // Assert
        assert!(providers.results.contains_key("US"));
    }
}
