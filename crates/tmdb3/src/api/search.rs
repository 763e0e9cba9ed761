//! Search endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::TmdbClient;
use crate::params::Query;
use crate::types::collection::CollectionItem;
use crate::types::media::{MediaListItem, Movie, TvShow};
use crate::types::page::PageResult;
use crate::types::person::Person;
use crate::types::search::{
    SearchMovieParams, SearchMultiParams, SearchPersonParams, SearchTvParams,
};

impl TmdbClient {
    /// Searches for movies (`search/movie`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn search_movies(&self, params: &SearchMovieParams) -> Result<PageResult<Movie>> {
        let mut query = Query::new();
        query.push("query", params.query.clone());
        query.push_opt("language", self.language_or_default(params.language.as_deref()));
        query.push_opt("region", self.region_or_default(params.region.as_deref()));
        query.push("page", params.page.to_string());
        query.push("include_adult", params.include_adult.to_string());
        query.push_opt(
            "primary_release_year",
            params.primary_release_year.map(|y| y.to_string()),
        );
        query.push_opt("year", params.year.map(|y| y.to_string()));
        self.get_json("search/movie", &query).await
    }

    /// Searches for TV shows (`search/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn search_tv(&self, params: &SearchTvParams) -> Result<PageResult<TvShow>> {
        let mut query = Query::new();
        query.push("query", params.query.clone());
        query.push_opt("language", self.language_or_default(params.language.as_deref()));
        query.push("page", params.page.to_string());
        query.push("include_adult", params.include_adult.to_string());
        query.push_opt(
            "first_air_date_year",
            params.first_air_date_year.map(|y| y.to_string()),
        );
        query.push_opt("year", params.year.map(|y| y.to_string()));
        self.get_json("search/tv", &query).await
    }

    /// Searches movies and TV shows in one call (`search/multi`).
    ///
    /// Each result carries a `media_type` tag selecting the variant.
    /// People are not part of the union; a `person` tag fails decoding.
    /// Use [`Self::search_people`] for person search.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or a result carries
    /// an unsupported `media_type` tag.
    #[instrument(skip_all)]
    pub async fn search_multi(
        &self,
        params: &SearchMultiParams,
    ) -> Result<PageResult<MediaListItem>> {
        let mut query = Query::new();
        query.push("query", params.query.clone());
        query.push_opt("language", self.language_or_default(params.language.as_deref()));
        query.push("page", params.page.to_string());
        query.push("include_adult", params.include_adult.to_string());
        self.get_json("search/multi", &query).await
    }

    /// Searches for people (`search/person`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn search_people(&self, params: &SearchPersonParams) -> Result<PageResult<Person>> {
        let mut query = Query::new();
        query.push("query", params.query.clone());
        query.push_opt("language", self.language_or_default(params.language.as_deref()));
        query.push("page", params.page.to_string());
        query.push("include_adult", params.include_adult.to_string());
        self.get_json("search/person", &query).await
    }

    /// Searches for collections (`search/collection`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn search_collections(
        &self,
        search_query: &str,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<CollectionItem>> {
        let mut query = Query::new();
        query.push("query", search_query);
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        self.get_json("search/collection", &query).await
    }
}
