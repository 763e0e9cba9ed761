//! Discover endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::TmdbClient;
use crate::params::Query;
use crate::types::discover::{DiscoverMovieParams, DiscoverTvParams};
use crate::types::media::{Movie, TvShow};
use crate::types::page::PageResult;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl TmdbClient {
    /// Discovers movies by typed filters (`discover/movie`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn discover_movies(
        &self,
        params: &DiscoverMovieParams,
    ) -> Result<PageResult<Movie>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(params.language.as_deref()));
        query.push_opt("region", self.region_or_default(params.region.as_deref()));
        query.push_opt("page", params.page.map(|p| p.to_string()));
        query.push_opt("sort_by", params.sort_by.map(|s| s.as_str()));
        push_id_list(&mut query, "with_genres", &params.with_genres);
        push_id_list(&mut query, "without_genres", &params.without_genres);
        query.push_opt(
            "primary_release_year",
            params.primary_release_year.map(|y| y.to_string()),
        );
        query.push_opt(
            "primary_release_date.gte",
            params
                .primary_release_date_gte
                .map(|d| d.format(DATE_FORMAT).to_string()),
        );
        query.push_opt(
            "primary_release_date.lte",
            params
                .primary_release_date_lte
                .map(|d| d.format(DATE_FORMAT).to_string()),
        );
        query.push_opt(
            "with_original_language",
            params.with_original_language.clone(),
        );
        push_id_list(&mut query, "with_watch_providers", &params.with_watch_providers);
        query.push_opt("watch_region", params.watch_region.clone());
        query.push_opt(
            "vote_count.gte",
            params.vote_count_gte.map(|v| v.to_string()),
        );
        if params.include_adult {
            query.push("include_adult", "true");
        }
        if params.include_video {
            query.push("include_video", "true");
        }
        self.get_json("discover/movie", &query).await
    }

    /// Discovers TV shows by typed filters (`discover/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn discover_tv(&self, params: &DiscoverTvParams) -> Result<PageResult<TvShow>> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(params.language.as_deref()));
        query.push_opt("page", params.page.map(|p| p.to_string()));
        query.push_opt("sort_by", params.sort_by.map(|s| s.as_str()));
        push_id_list(&mut query, "with_genres", &params.with_genres);
        push_id_list(&mut query, "without_genres", &params.without_genres);
        query.push_opt(
            "first_air_date_year",
            params.first_air_date_year.map(|y| y.to_string()),
        );
        query.push_opt(
            "first_air_date.gte",
            params
                .first_air_date_gte
                .map(|d| d.format(DATE_FORMAT).to_string()),
        );
        query.push_opt(
            "first_air_date.lte",
            params
                .first_air_date_lte
                .map(|d| d.format(DATE_FORMAT).to_string()),
        );
        query.push_opt("with_origin_country", params.with_origin_country.clone());
        query.push_opt(
            "with_original_language",
            params.with_original_language.clone(),
        );
        push_id_list(&mut query, "with_watch_providers", &params.with_watch_providers);
        query.push_opt("watch_region", params.watch_region.clone());
        query.push_opt(
            "vote_count.gte",
            params.vote_count_gte.map(|v| v.to_string()),
        );
        if params.include_adult {
            query.push("include_adult", "true");
        }
        self.get_json("discover/tv", &query).await
    }
}

/// Comma-joins a numeric id list; an empty list is omitted.
fn push_id_list(query: &mut Query, key: &'static str, ids: &[u32]) {
    let tokens: Vec<String> = ids.iter().map(u32::to_string).collect();
    query.push_join(key, &tokens);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;
    use crate::types::discover::{DiscoverMovieParams, SortBy};

    #[tokio::test]
    async fn test_discover_movies_sends_only_set_filters() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_movie_matrix.json");

        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .and(query_param("sort_by", "popularity.desc"))
            .and(query_param("with_genres", "28,878"))
            .and(query_param("vote_count.gte", "100"))
            .and(query_param_is_missing("without_genres"))
            .and(query_param_is_missing("watch_region"))
            .and(query_param_is_missing("include_adult"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap();

        let params = DiscoverMovieParams::new()
            .sort_by(SortBy::PopularityDesc)
            .with_genres(vec![28, 878])
            .vote_count_gte(100);

        // Act
        let page = client.discover_movies(&params).await.unwrap();

        // Assert
        assert!(!page.results.is_empty());
    }
}
