//! Trending endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::{Query, TimeWindow};
use crate::types::media::{Movie, TvShow};
use crate::types::page::PageResult;
use crate::types::person::Person;

impl TmdbClient {
    /// Fetches trending movies (`trending/movie/{window}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn trending_movies(
        &self,
        window: TimeWindow,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Movie>> {
        let query = self.trending_query(language, page);
        self.get_json(&join_path(&["trending", "movie", window.as_str()]), &query)
            .await
    }

    /// Fetches trending TV shows (`trending/tv/{window}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn trending_tv(
        &self,
        window: TimeWindow,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        let query = self.trending_query(language, page);
        self.get_json(&join_path(&["trending", "tv", window.as_str()]), &query)
            .await
    }

    /// Fetches trending people (`trending/person/{window}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn trending_people(
        &self,
        window: TimeWindow,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<Person>> {
        let query = self.trending_query(language, page);
        self.get_json(&join_path(&["trending", "person", window.as_str()]), &query)
            .await
    }

    fn trending_query(&self, language: Option<&str>, page: Option<u32>) -> Query {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        query
    }
}
