//! Watch provider catalog endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::TmdbClient;
use crate::params::Query;
use crate::types::watch_providers::{WatchProviderList, WatchProviderRegions};

impl TmdbClient {
    /// Fetches the countries with watch provider data
    /// (`watch/providers/regions`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn watch_provider_regions(
        &self,
        language: Option<&str>,
    ) -> Result<WatchProviderRegions> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json("watch/providers/regions", &query).await
    }

    /// Fetches all movie watch providers (`watch/providers/movie`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn movie_watch_provider_list(
        &self,
        language: Option<&str>,
        watch_region: Option<&str>,
    ) -> Result<WatchProviderList> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("watch_region", watch_region);
        self.get_json("watch/providers/movie", &query).await
    }

    /// Fetches all TV watch providers (`watch/providers/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn tv_watch_provider_list(
        &self,
        language: Option<&str>,
        watch_region: Option<&str>,
    ) -> Result<WatchProviderList> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("watch_region", watch_region);
        self.get_json("watch/providers/tv", &query).await
    }
}
