//! Collection endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::Query;
use crate::types::collection::CollectionDetails;
use crate::types::image::Images;

impl TmdbClient {
    /// Fetches collection details including member movies
    /// (`collection/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn collection_details(
        &self,
        id: u64,
        language: Option<&str>,
    ) -> Result<CollectionDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["collection", &id.to_string()]), &query)
            .await
    }

    /// Fetches images for a collection (`collection/{id}/images`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn collection_images(
        &self,
        id: u64,
        include_image_language: Option<&str>,
    ) -> Result<Images> {
        let mut query = Query::new();
        query.push_opt("include_image_language", include_image_language);
        self.get_json(
            &join_path(&["collection", &id.to_string(), "images"]),
            &query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;

    #[tokio::test]
    async fn test_collection_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/collection_details_2344.json");

        Mock::given(method("GET"))
            .and(path("/3/collection/2344"))
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
        let collection = client.collection_details(2344, None).await.unwrap();

        // Assert
        assert_eq!(collection.name, "The Matrix Collection");
        assert!(collection.parts.iter().any(|m| m.id == 603));
    }
}
