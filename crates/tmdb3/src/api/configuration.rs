//! Configuration endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::TmdbClient;
use crate::params::Query;
use crate::types::configuration::{Configuration, Country, Language};

impl TmdbClient {
    /// Fetches the API configuration (`configuration`): image base URLs,
    /// size tokens, and change keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn configuration(&self) -> Result<Configuration> {
        self.get_json("configuration", &Query::new()).await
    }

    /// Fetches the countries used by the API
    /// (`configuration/countries`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn configuration_countries(&self, language: Option<&str>) -> Result<Vec<Country>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json("configuration/countries", &query).await
    }

    /// Fetches the languages used by the API
    /// (`configuration/languages`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn configuration_languages(&self) -> Result<Vec<Language>> {
        self.get_json("configuration/languages", &Query::new())
            .await
    }

    /// Fetches the language tags usable as `language` parameters
    /// (`configuration/primary_translations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn primary_translations(&self) -> Result<Vec<String>> {
        self.get_json("configuration/primary_translations", &Query::new())
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
    async fn test_configuration_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/configuration.json");

        Mock::given(method("GET"))
            .and(path("/3/configuration"))
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
        let config = client.configuration().await.unwrap();

        // Assert
        assert_eq!(config.images.secure_base_url, "https://image.tmdb.org/t/p/");
        assert!(config.images.poster_sizes.contains(&String::from("w500")));
    }
}
