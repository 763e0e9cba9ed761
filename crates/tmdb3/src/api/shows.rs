//! TV show endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::{AppendResponse, Query};
use crate::types::credits::{AggregateCredits, Credits};
use crate::types::external_ids::ExternalIds;
use crate::types::image::Images;
use crate::types::media::TvShow;
use crate::types::page::PageResult;
use crate::types::show::{ContentRatings, TvShowDetails};
use crate::types::translations::Translations;
use crate::types::watch_providers::WatchProviderResult;

impl TmdbClient {
    /// Fetches show details (`tv/{id}`), optionally inlining the given
    /// sub-resources via `append_to_response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the
    /// request, or the response cannot be decoded.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_details(
        &self,
        id: u64,
        language: Option<&str>,
        append: &[AppendResponse],
    ) -> Result<TvShowDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_append(append);
        self.get_json(&join_path(&["tv", &id.to_string()]), &query)
            .await
    }

    /// Fetches cast and crew for a show (`tv/{id}/credits`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_credits(&self, id: u64, language: Option<&str>) -> Result<Credits> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(&join_path(&["tv", &id.to_string(), "credits"]), &query)
            .await
    }

    /// Fetches episode-spanning cast and crew for a show
    /// (`tv/{id}/aggregate_credits`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_aggregate_credits(
        &self,
        id: u64,
        language: Option<&str>,
    ) -> Result<AggregateCredits> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        self.get_json(
            &join_path(&["tv", &id.to_string(), "aggregate_credits"]),
            &query,
        )
        .await
    }

    /// Fetches external ids for a show (`tv/{id}/external_ids`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_external_ids(&self, id: u64) -> Result<ExternalIds> {
        self.get_json(
            &join_path(&["tv", &id.to_string(), "external_ids"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches images for a show (`tv/{id}/images`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_images(&self, id: u64, include_image_language: Option<&str>) -> Result<Images> {
        let mut query = Query::new();
        query.push_opt("include_image_language", include_image_language);
        self.get_json(&join_path(&["tv", &id.to_string(), "images"]), &query)
            .await
    }

    /// Fetches translations for a show (`tv/{id}/translations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_translations(&self, id: u64) -> Result<Translations> {
        self.get_json(
            &join_path(&["tv", &id.to_string(), "translations"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches watch provider availability for a show
    /// (`tv/{id}/watch/providers`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_watch_providers(&self, id: u64) -> Result<WatchProviderResult> {
        self.get_json(
            &join_path(&["tv", &id.to_string(), "watch", "providers"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches per-country content ratings (`tv/{id}/content_ratings`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_content_ratings(&self, id: u64) -> Result<ContentRatings> {
        self.get_json(
            &join_path(&["tv", &id.to_string(), "content_ratings"]),
            &Query::new(),
        )
        .await
    }

    /// Fetches recommendations for a show (`tv/{id}/recommendations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(id))]
    pub async fn tv_recommendations(
        &self,
        id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        self.get_json(
            &join_path(&["tv", &id.to_string(), "recommendations"]),
            &query,
        )
        .await
    }

    /// Fetches the popular shows list (`tv/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn popular_tv(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        self.tv_list("popular", language, page).await
    }

    /// Fetches the top rated shows list (`tv/top_rated`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn top_rated_tv(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        self.tv_list("top_rated", language, page).await
    }

    /// Fetches shows airing within the next week (`tv/on_the_air`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn on_the_air_tv(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        self.tv_list("on_the_air", language, page).await
    }

    /// Fetches shows airing today (`tv/airing_today`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn airing_today_tv(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        self.tv_list("airing_today", language, page).await
    }

    async fn tv_list(
        &self,
        list: &str,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PageResult<TvShow>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_opt("page", page.map(|p| p.to_string()));
        self.get_json(&join_path(&["tv", list]), &query).await
    }
}
