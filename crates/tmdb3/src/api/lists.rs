//! User list endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::Query;
use crate::types::account::StatusResponse;
use crate::types::list::{CreateList, CreateListResponse, ListDetails};

impl TmdbClient {
    /// Fetches a list and its items (`list/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn list_details(&self, id: u64, language: Option<&str>) -> Result<ListDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["list", &id.to_string()]), &query)
            .await
    }

    /// Creates a new list owned by the session's account (`list`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all)]
    pub async fn create_list(
        &self,
        session_id: &str,
        body: &CreateList,
    ) -> Result<CreateListResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.post_json("list", &query, body).await
    }

    /// Adds a movie to a list (`list/{id}/add_item`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all, fields(id))]
    pub async fn add_list_item(
        &self,
        id: u64,
        session_id: &str,
        media_id: u64,
    ) -> Result<StatusResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.post_json(
            &join_path(&["list", &id.to_string(), "add_item"]),
            &query,
            &serde_json::json!({ "media_id": media_id }),
        )
        .await
    }

    /// Removes a movie from a list (`list/{id}/remove_item`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all, fields(id))]
    pub async fn remove_list_item(
        &self,
        id: u64,
        session_id: &str,
        media_id: u64,
    ) -> Result<StatusResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.post_json(
            &join_path(&["list", &id.to_string(), "remove_item"]),
            &query,
            &serde_json::json!({ "media_id": media_id }),
        )
        .await
    }

    /// Removes every item from a list (`list/{id}/clear`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all, fields(id))]
    pub async fn clear_list(&self, id: u64, session_id: &str) -> Result<StatusResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        query.push("confirm", "true");
        self.post_json(
            &join_path(&["list", &id.to_string(), "clear"]),
            &query,
            &serde_json::json!({}),
        )
        .await
    }

    /// Deletes a list (`list/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails, or
    /// if TMDB rejects the mutation.
    #[instrument(skip_all, fields(id))]
    pub async fn delete_list(&self, id: u64, session_id: &str) -> Result<StatusResponse> {
        let mut query = Query::new();
        query.push("session_id", session_id);
        self.delete_json(&join_path(&["list", &id.to_string()]), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;
    use crate::types::list::CreateList;
    use crate::types::media::MediaListItem;

    fn client_for(mock_server: &MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/list_details_5.json");

        Mock::given(method("GET"))
            .and(path("/3/list/5"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let list = client.list_details(5, None).await.unwrap();

        // Assert
        assert_eq!(list.name, "Essential science fiction");
        assert!(matches!(list.items[0], MediaListItem::Movie(_)));
    }

    #[tokio::test]
    async fn test_create_list_posts_body() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/create_list_response.json");

        Mock::given(method("POST"))
            .and(path("/3/list"))
            .and(query_param("session_id", "abc123"))
            .and(body_json(serde_json::json!({
                "name": "Essential science fiction",
                "description": "Genre staples",
                "language": "en",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = CreateList {
            name: "Essential science fiction".to_owned(),
            description: "Genre staples".to_owned(),
            language: "en".to_owned(),
        };

        // Act
        let created = client.create_list("abc123", &body).await.unwrap();

        // Assert
        assert_eq!(created.list_id, 5);
    }

    #[tokio::test]
    async fn test_add_list_item_posts_media_id() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/status_success.json");

        Mock::given(method("POST"))
            .and(path("/3/list/5/add_item"))
            .and(query_param("session_id", "abc123"))
            .and(body_json(serde_json::json!({ "media_id": 603 })))
            .respond_with(ResponseTemplate::new(201).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let status = client.add_list_item(5, "abc123", 603).await.unwrap();

        // Assert
        assert_eq!(status.status_code, 1);
    }

    #[tokio::test]
    async fn test_clear_list_requires_confirm() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/status_success.json");

        Mock::given(method("POST"))
            .and(path("/3/list/5/clear"))
            .and(query_param("session_id", "abc123"))
            .and(query_param("confirm", "true"))
            .respond_with(ResponseTemplate::new(201).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let status = client.clear_list(5, "abc123").await.unwrap();

        // Assert
        assert_eq!(status.status_code, 1);
    }

    #[tokio::test]
    async fn test_delete_list_uses_delete_method() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/status_deleted.json");

        Mock::given(method("DELETE"))
            .and(path("/3/list/5"))
            .and(query_param("session_id", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let status = client.delete_list(5, "abc123").await.unwrap();

        // Assert
        assert_eq!(status.status_code, 13);
    }
}
