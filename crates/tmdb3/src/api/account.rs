//! Session-scoped account endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::Query;
use crate::types::account::{Account, MarkFavorite, MarkWatchlist, StatusResponse};
use crate::types::media::{Movie, TvShow};
use crate::types::page::PageResult;

impl TmdbClient {
    /// Fetches the account attached to a session (`account`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn account_details(&self, session_id: &str) -> Result<Account> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.get_json("account", &query).await
    }

    /// Fetches the account's favorite movies
    /// (`account/{id}/favorite/movies`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(account_id))]
    pub async fn favorite_movies(
        &self,
        account_id: u64,
        session_id: &str,
        language: Option<&str>,
        page: u32,
    ) -> Result<PageResult<Movie>> {
        self.account_page(account_id, "favorite/movies", session_id, language, page)
            .await
    }

    /// Fetches the account's favorite TV shows
    /// (`account/{id}/favorite/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(account_id))]
    pub async fn favorite_tv(
        &self,
        account_id: u64,
        session_id: &str,
        language: Option<&str>,
        page: u32,
    ) -> Result<PageResult<TvShow>> {
        self.account_page(account_id, "favorite/tv", session_id, language, page)
            .await
    }

    /// Fetches the account's movie watchlist
    /// (`account/{id}/watchlist/movies`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(account_id))]
    pub async fn watchlist_movies(
        &self,
        account_id: u64,
        session_id: &str,
        language: Option<&str>,
        page: u32,
    ) -> Result<PageResult<Movie>> {
        self.account_page(account_id, "watchlist/movies", session_id, language, page)
            .await
    }

    /// Fetches the account's TV watchlist
    /// (`account/{id}/watchlist/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(account_id))]
    pub async fn watchlist_tv(
        &self,
        account_id: u64,
        session_id: &str,
        language: Option<&str>,
        page: u32,
    ) -> Result<PageResult<TvShow>> {
        self.account_page(account_id, "watchlist/tv", session_id, language, page)
            .await
    }

    /// Marks or unmarks a movie or show as a favorite
    /// (`account/{id}/favorite`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all, fields(account_id))]
    pub async fn mark_favorite(
        &self,
        account_id: u64,
        session_id: &str,
        body: &MarkFavorite,
    ) -> Result<StatusResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.post_json(
            &join_path(&["account", &account_id.to_string(), "favorite"]),
            &query,
            body,
        )
        .await
    }

    /// Adds or removes a movie or show on the watchlist
    /// (`account/{id}/watchlist`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all, fields(account_id))]
    pub async fn mark_watchlist(
        &self,
        account_id: u64,
        session_id: &str,
        body: &MarkWatchlist,
    ) -> Result<StatusResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.post_json(
            &join_path(&["account", &account_id.to_string(), "watchlist"]),
            &query,
            body,
        )
        .await
    }

    async fn account_page<T: serde::de::DeserializeOwned>(
        &self,
        account_id: u64,
        resource: &str,
        session_id: &str,
        language: Option<&str>,
        page: u32,
    ) -> Result<PageResult<T>> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        query.push_opt("language", self.language_or_default(language));
        query.push("page", page.to_string());
        self.get_json(
            &join_path(&["account", &account_id.to_string(), resource]),
            &query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;
    use crate::types::account::MarkFavorite;
    use crate::types::media::MediaType;

    fn client_for(mock_server: &MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_account_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/account.json");

        Mock::given(method("GET"))
            .and(path("/3/account"))
            .and(query_param("session_id", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let account = client.account_details("abc123").await.unwrap();

        // Assert
        assert_eq!(account.id, 548);
        assert_eq!(account.username, "travisbell");
    }

    #[tokio::test]
    async fn test_mark_favorite_posts_json_body() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/status_success.json");

        Mock::given(method("POST"))
            .and(path("/3/account/548/favorite"))
            .and(query_param("session_id", "abc123"))
            .and(body_json(serde_json::json!({
                "media_type": "movie",
                "media_id": 603,
                "favorite": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = MarkFavorite {
            media_type: MediaType::Movie,
            media_id: 603,
            favorite: true,
        };

        // Act
        let status = client.mark_favorite(548, "abc123", &body).await.unwrap();

        // Assert
        assert_eq!(status.status_code, 1);
        assert_eq!(status.success, Some(true));
    }

    #[tokio::test]
    async fn test_watchlist_movies_sends_page_and_session() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/popular_movies_page.json");

        Mock::given(method("GET"))
            .and(path("/3/account/548/watchlist/movies"))
            .and(query_param("session_id", "abc123"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let page = client
            .watchlist_movies(548, "abc123", None, 2)
            .await
            .unwrap();

        // Assert
        assert_eq!(page.results.len(), 20);
    }
}
