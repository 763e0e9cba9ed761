//! Typed discover filters.

use chrono::NaiveDate;

/// Sort order for discover results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Most popular first (the API default).
    PopularityDesc,
    /// Least popular first.
    PopularityAsc,
    /// Newest release first.
    ReleaseDateDesc,
    /// Oldest release first.
    ReleaseDateAsc,
    /// Newest first air date first.
    FirstAirDateDesc,
    /// Oldest first air date first.
    FirstAirDateAsc,
    /// Highest rated first.
    VoteAverageDesc,
    /// Lowest rated first.
    VoteAverageAsc,
    /// Most voted first.
    VoteCountDesc,
    /// Highest revenue first.
    RevenueDesc,
}

impl SortBy {
    /// `sort_by` parameter value as the API expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopularityDesc => "popularity.desc",
            Self::PopularityAsc => "popularity.asc",
            Self::ReleaseDateDesc => "primary_release_date.desc",
            Self::ReleaseDateAsc => "primary_release_date.asc",
            Self::FirstAirDateDesc => "first_air_date.desc",
            Self::FirstAirDateAsc => "first_air_date.asc",
            Self::VoteAverageDesc => "vote_average.desc",
            Self::VoteAverageAsc => "vote_average.asc",
            Self::VoteCountDesc => "vote_count.desc",
            Self::RevenueDesc => "revenue.desc",
        }
    }
}

/// Filters for `discover/movie`.
#[derive(Debug, Clone, Default)]
pub struct DiscoverMovieParams {
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// Region for release date filtering (ISO 3166-1).
    pub region: Option<String>,
    /// Result page (default: 1 when unset).
    pub page: Option<u32>,
    /// Sort order.
    pub sort_by: Option<SortBy>,
    /// Genre ids a result must have (comma-joined, AND semantics).
    pub with_genres: Vec<u32>,
    /// Genre ids a result must not have.
    pub without_genres: Vec<u32>,
    /// Filter by primary release year.
    pub primary_release_year: Option<u32>,
    /// Primary release date window start (inclusive).
    pub primary_release_date_gte: Option<NaiveDate>,
    /// Primary release date window end (inclusive).
    pub primary_release_date_lte: Option<NaiveDate>,
    /// Original language filter (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Watch provider ids a result must be available on.
    pub with_watch_providers: Vec<u32>,
    /// Country the watch provider filter applies to (ISO 3166-1).
    pub watch_region: Option<String>,
    /// Minimum vote count.
    pub vote_count_gte: Option<u32>,
    /// Include adult content.
    pub include_adult: bool,
    /// Include video-only releases.
    pub include_video: bool,
}

impl DiscoverMovieParams {
    /// Creates empty filters (API defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Requires the given genres.
    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<Vec<u32>>) -> Self {
        self.with_genres = genres.into();
        self
    }

    /// Excludes the given genres.
    #[must_use]
    pub fn without_genres(mut self, genres: impl Into<Vec<u32>>) -> Self {
        self.without_genres = genres.into();
        self
    }

    /// Sets the primary release year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Sets the release date window start (inclusive).
    #[must_use]
    pub const fn primary_release_date_gte(mut self, date: NaiveDate) -> Self {
        self.primary_release_date_gte = Some(date);
        self
    }

    /// Sets the release date window end (inclusive).
    #[must_use]
    pub const fn primary_release_date_lte(mut self, date: NaiveDate) -> Self {
        self.primary_release_date_lte = Some(date);
        self
    }

    /// Sets the original language filter.
    #[must_use]
    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.with_original_language = Some(language.into());
        self
    }

    /// Requires availability on the given watch providers.
    #[must_use]
    pub fn with_watch_providers(mut self, providers: impl Into<Vec<u32>>) -> Self {
        self.with_watch_providers = providers.into();
        self
    }

    /// Sets the watch provider country.
    #[must_use]
    pub fn watch_region(mut self, region: impl Into<String>) -> Self {
        self.watch_region = Some(region.into());
        self
    }

    /// Sets the minimum vote count.
    #[must_use]
    pub const fn vote_count_gte(mut self, count: u32) -> Self {
        self.vote_count_gte = Some(count);
        self
    }
}

/// Filters for `discover/tv`.
#[derive(Debug, Clone, Default)]
pub struct DiscoverTvParams {
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// Result page (default: 1 when unset).
    pub page: Option<u32>,
    /// Sort order.
    pub sort_by: Option<SortBy>,
    /// Genre ids a result must have.
    pub with_genres: Vec<u32>,
    /// Genre ids a result must not have.
    pub without_genres: Vec<u32>,
    /// Filter by first air date year.
    pub first_air_date_year: Option<u32>,
    /// First air date window start (inclusive).
    pub first_air_date_gte: Option<NaiveDate>,
    /// First air date window end (inclusive).
    pub first_air_date_lte: Option<NaiveDate>,
    /// Origin country filter (ISO 3166-1).
    pub with_origin_country: Option<String>,
    /// Original language filter (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Watch provider ids a result must be available on.
    pub with_watch_providers: Vec<u32>,
    /// Country the watch provider filter applies to (ISO 3166-1).
    pub watch_region: Option<String>,
    /// Minimum vote count.
    pub vote_count_gte: Option<u32>,
    /// Include adult content.
    pub include_adult: bool,
}

impl DiscoverTvParams {
    /// Creates empty filters (API defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Requires the given genres.
    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<Vec<u32>>) -> Self {
        self.with_genres = genres.into();
        self
    }

    /// Excludes the given genres.
    #[must_use]
    pub fn without_genres(mut self, genres: impl Into<Vec<u32>>) -> Self {
        self.without_genres = genres.into();
        self
    }

    /// Sets the first air date year filter.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    /// Sets the first air date window start (inclusive).
    #[must_use]
    pub const fn first_air_date_gte(mut self, date: NaiveDate) -> Self {
        self.first_air_date_gte = Some(date);
        self
    }

    /// Sets the first air date window end (inclusive).
    #[must_use]
    pub const fn first_air_date_lte(mut self, date: NaiveDate) -> Self {
        self.first_air_date_lte = Some(date);
        self
    }

    /// Sets the origin country filter.
    #[must_use]
    pub fn with_origin_country(mut self, country: impl Into<String>) -> Self {
        self.with_origin_country = Some(country.into());
        self
    }

    /// Sets the original language filter.
    #[must_use]
    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.with_original_language = Some(language.into());
        self
    }

    /// Requires availability on the given watch providers.
    #[must_use]
    pub fn with_watch_providers(mut self, providers: impl Into<Vec<u32>>) -> Self {
        self.with_watch_providers = providers.into();
        self
    }

    /// Sets the watch provider country.
    #[must_use]
    pub fn watch_region(mut self, region: impl Into<String>) -> Self {
        self.watch_region = Some(region.into());
        self
    }

    /// Sets the minimum vote count.
    #[must_use]
    pub const fn vote_count_gte(mut self, count: u32) -> Self {
        self.vote_count_gte = Some(count);
        self
    }
}
