//! `TmdbClient` - client construction and the shared request pipeline.
//!
//! Every endpoint method funnels through the executors in this module:
//! the credential and base URL are applied before a request leaves the
//! process, and the response status is validated before the body is
//! decoded. Decoding therefore never runs on an error-shaped payload.

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::Result;
use crate::error::TmdbError;
use crate::params::Query;
use crate::types::StatusResponse;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Joins path segments with `/`, preserving order.
///
/// Segments are assumed URL-safe (numeric ids or fixed literals); no
/// escaping is performed.
pub(crate) fn join_path(segments: &[&str]) -> String {
    segments.join("/")
}

/// API credential, chosen at construction.
#[derive(Debug, Clone)]
enum Credential {
    /// v3 `api_key` query parameter.
    ApiKey(String),
    /// v4 read access token sent as a Bearer header.
    Bearer(String),
}

/// TMDB API client.
///
/// Immutable after construction; safe to share across tasks, since every
/// call builds its own request from the shared template.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API credential.
    credential: Credential,
    /// Default `language` parameter for calls that pass `None`.
    default_language: Option<String>,
    /// Default `region` parameter for calls that pass `None`.
    default_region: Option<String>,
}

/// Builder for `TmdbClient`.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    access_token: Option<String>,
    user_agent: Option<String>,
    language: Option<String>,
    region: Option<String>,
}

impl TmdbClientBuilder {
    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the v3 API key, sent as the `api_key` query parameter.
    ///
    /// One of `api_key` and `access_token` is required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the v4 read access token, sent as a Bearer header.
    ///
    /// One of `api_key` and `access_token` is required.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the default `language` parameter (ISO 639-1, e.g. `en-US`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the default `region` parameter (ISO 3166-1, e.g. `US`).
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - Neither `api_key` nor `access_token` is set.
    /// - The default base URL fails to parse.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let credential = match (self.api_key, self.access_token) {
            (Some(key), _) => Credential::ApiKey(key),
            (None, Some(token)) => Credential::Bearer(token),
            (None, None) => {
                return Err(TmdbError::Config(String::from(
                    "either api_key or access_token is required",
                )));
            }
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| TmdbError::Config(format!("invalid default base URL: {e}")))?,
        };

        let mut http_builder = Client::builder().gzip(true);
        if let Some(ua) = self.user_agent {
            http_builder = http_builder.user_agent(ua);
        }
        let http_client = http_builder
            .build()
            .map_err(|e| TmdbError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(TmdbClient {
            http_client,
            base_url,
            credential,
            default_language: self.language,
            default_region: self.region,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::default()
    }

    /// Per-call language, falling back to the client default.
    pub(crate) fn language_or_default(&self, language: Option<&str>) -> Option<String> {
        language.map(String::from).or_else(|| self.default_language.clone())
    }

    /// Per-call region, falling back to the client default.
    pub(crate) fn region_or_default(&self, region: Option<&str>) -> Option<String> {
        region.map(String::from).or_else(|| self.default_region.clone())
    }

    /// Resolves a relative endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| TmdbError::Config(format!("failed to join URL path {path}: {e}")))
    }

    /// Applies the credential chosen at construction.
    fn apply_credential(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::ApiKey(key) => builder.query(&[("api_key", key.as_str())]),
            Credential::Bearer(token) => builder.bearer_auth(token),
        }
    }

    /// Sends a prepared request and decodes the body.
    ///
    /// Status validation runs strictly before decoding: a non-success
    /// response becomes `TmdbError::Api` carrying the status and the
    /// parsed error envelope when the body contains one.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = self.apply_credential(builder).build()?;
        tracing::debug!(url = %request.url(), method = %request.method(), "TMDB API request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let payload = serde_json::from_str::<StatusResponse>(&body).ok();
            let message = payload
                .as_ref()
                .map_or_else(|| body.clone(), |p| p.status_message.clone());
            return Err(TmdbError::Api {
                status: status.as_u16(),
                message,
                payload,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Decode {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }

    /// Executes a GET request against `path` with the given query.
    #[instrument(skip_all)]
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        let mut builder = self.http_client.get(self.endpoint(path)?);
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }
        self.send(builder).await
    }

    /// Executes a POST request with a JSON body.
    #[instrument(skip_all)]
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &Query,
        body: &B,
    ) -> Result<T> {
        let mut builder = self.http_client.post(self.endpoint(path)?).json(body);
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }
        self.send(builder).await
    }

    /// Executes a DELETE request.
    #[instrument(skip_all)]
    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        let mut builder = self.http_client.delete(self.endpoint(path)?);
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }
        self.send(builder).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_join_path_preserves_order() {
        // Arrange & Act & Assert
        assert_eq!(join_path(&["movie", "42", "credits"]), "movie/42/credits");
        assert_eq!(join_path(&["configuration"]), "configuration");
    }

    #[test]
    fn test_builder_requires_credential() {
        // Arrange & Act
        let result = TmdbClient::builder().build();

        // Assert
        assert!(matches!(result, Err(TmdbError::Config(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api_key or access_token is required")
        );
    }

    #[test]
    fn test_builder_with_api_key_succeeds() {
        // Arrange & Act
        let result = TmdbClient::builder().api_key("test-key").build();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/3/").unwrap();

        // Act
        let client = TmdbClient::builder()
            .base_url(custom_url.clone())
            .access_token("test-token")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_language_falls_back_to_default() {
        // Arrange
        let client = TmdbClient::builder()
            .api_key("test-key")
            .language("ja-JP")
            .build()
            .unwrap();

        // Act & Assert
        assert_eq!(client.language_or_default(None), Some(String::from("ja-JP")));
        assert_eq!(
            client.language_or_default(Some("de-DE")),
            Some(String::from("de-DE"))
        );
    }

    #[test]
    fn test_language_omitted_when_no_default() {
        // Arrange
        let client = TmdbClient::builder().api_key("test-key").build().unwrap();

        // Act & Assert
        assert_eq!(client.language_or_default(None), None);
        assert_eq!(client.region_or_default(None), None);
    }

    #[tokio::test]
    async fn test_api_key_reaches_the_wire() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/configuration.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/configuration"))
            .and(wiremock::matchers::query_param("api_key", "my-secret-key"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("my-secret-key")
            .build()
            .unwrap();

        // Act & Assert (mock expect(1) verifies the api_key parameter)
        client.configuration().await.unwrap();
    }

    #[tokio::test]
    async fn test_bearer_token_reaches_the_wire() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/configuration.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Bearer my-secret-token",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .access_token("my-secret-token")
            .build()
            .unwrap();

        // Act & Assert (mock expect(1) verifies the Authorization header)
        client.configuration().await.unwrap();
    }

    #[tokio::test]
    async fn test_not_found_is_an_api_error_not_a_decode_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap();

        // Act
        let result = client.movie_details(0, None, &[]).await;

        // Assert
        match result {
            Err(TmdbError::Api { status, message, payload }) => {
                assert_eq!(status, 404);
                assert!(message.contains("could not be found"));
                assert_eq!(payload.unwrap().status_code, 34);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_a_decode_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string(r#"{"id":"not-a-number"}"#),
            )
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap();

        // Act
        let result = client.movie_details(603, None, &[]).await;

        // Assert
        match result {
            Err(TmdbError::Decode { path, .. }) => assert_eq!(path, "id"),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
