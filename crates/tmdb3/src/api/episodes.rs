//! TV episode endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::{TmdbClient, join_path};
use crate::params::{AppendResponse, Query};
use crate::types::episode::EpisodeDetails;
use crate::types::external_ids::ExternalIds;
use crate::types::image::Images;

impl TmdbClient {
    /// Fetches episode details (`tv/{id}/season/{n}/episode/{m}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the
    /// request, or the response cannot be decoded.
    #[instrument(skip_all, fields(tv_id, season_number, episode_number))]
    pub async fn episode_details(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        language: Option<&str>,
        append: &[AppendResponse],
    ) -> Result<EpisodeDetails> {
        let mut query = Query::new();
        query.push_opt("language", self.language_or_default(language));
        query.push_append(append);
        self.get_json(
            &join_path(&[
                "tv",
                &tv_id.to_string(),
                "season",
                &season_number.to_string(),
                "episode",
                &episode_number.to_string(),
            ]),
            &query,
        )
        .await
    }

    /// Fetches stills for an episode
    /// (`tv/{id}/season/{n}/episode/{m}/images`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(tv_id, season_number, episode_number))]
    pub async fn episode_images(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<Images> {
        self.get_json(
            &join_path(&[
                "tv",
                &tv_id.to_string(),
                "season",
                &season_number.to_string(),
                "episode",
                &episode_number.to_string(),
                "images",
            ]),
            &Query::new(),
        )
        .await
    }

    /// Fetches external ids for an episode
    /// (`tv/{id}/season/{n}/episode/{m}/external_ids`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all, fields(tv_id, season_number, episode_number))]
    pub async fn episode_external_ids(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<ExternalIds> {
        self.get_json(
            &join_path(&[
                "tv",
                &tv_id.to_string(),
                "season",
                &season_number.to_string(),
                "episode",
                &episode_number.to_string(),
                "external_ids",
            ]),
            &Query::new(),
        )
        .await
    }
}
