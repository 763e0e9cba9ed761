//! TV season endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::{AppendResponse, Query};
use crate::types::external_ids::ExternalIds;
use crate::types::image::Images;
use crate::types::season::SeasonDetails;

impl TmdbClient {
    /// Fetches season details including the episode list
    /// (`tv/{id}/season/{n}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the
    /// request, or the response cannot be decoded.
    #[instrument(skip_all, fields(tv_id, season_number))]
    pub async fn season_details(
        &self,
        tv_id: u64,
        season_number: u32,
        language: Option<&str>,
        append: &[AppendResponse],
    ) -> Result<SeasonDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_append(append);
        self.get_json(
            &join_path(&["tv", &tv_id.to_string(), "season", &season_number.to_string()]),
            &query,
        )
        .await
    }

    /// Fetches images for a season (`tv/{id}/season/{n}/images`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(tv_id, season_number))]
    pub async fn season_images(
        &self,
        tv_id: u64,
        season_number: u32,
        include_image_language: Option<&str>,
    ) -> Result<Images> {
        let mut query = Query::new();
        query.push_opt("include_image_language", include_image_language);
        self.get_json(
            &join_path(&[
                "tv",
                &tv_id.to_string(),
                "season",
                &season_number.to_string(),
                "images",
            ]),
            &query,
        )
        .await
    }

    /// Fetches external ids for a season
    /// (`tv/{id}/season/{n}/external_ids`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(tv_id, season_number))]
    pub async fn season_external_ids(
        &self,
        tv_id: u64,
        season_number: u32,
    ) -> Result<ExternalIds> {
        self.get_json(
            &join_path(&[
                "tv",
                &tv_id.to_string(),
                "season",
                &season_number.to_string(),
                "external_ids",
            ]),
            &Query::new(),
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
    async fn test_season_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/season_details_1396_1.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1396/season/1"))
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
        let season = client.season_details(1396, 1, None, &[]).await.unwrap();

        // Assert
        assert_eq!(season.season_number, 1);
        assert!(!season.episodes.is_empty());
    }
}
