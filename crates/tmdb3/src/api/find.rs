//! Find-by-external-id endpoint.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::Query;
use crate::types::external_ids::{ExternalSource, FindResult};

impl TmdbClient {
    /// Resolves an external database id to TMDB entities
    /// (`find/{external_id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(external_id))]
    pub async fn find_by_external_id(
        &self,
        external_id: &str,
        source: ExternalSource,
        language: Option<&str>,
    ) -> Result<FindResult> {
        let mut query = Query::new();
        query.push("external_source", source.as_str());
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["find", external_id]), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;
    use crate::types::external_ids::ExternalSource;

    #[tokio::test]
    async fn test_find_by_imdb_id_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/find_tt0133093.json");

        Mock::given(method("GET"))
            .and(path("/3/find/tt0133093"))
            .and(query_param("external_source", "imdb_id"))
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
        let found = client
            .find_by_external_id("tt0133093", ExternalSource::ImdbId, None)
            .await
            .unwrap();

        // Assert
        assert_eq!(found.movie_results[0].id, 603);
        assert!(found.tv_results.is_empty());
    }
}
