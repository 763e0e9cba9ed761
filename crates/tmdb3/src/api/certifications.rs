//! Certification list endpoints.

use tracing::instrument;

use crate::Result;
use crate::client::TmdbClient;
use crate::params::Query;
use crate::types::certification::Certifications;

impl TmdbClient {
    /// Fetches movie certifications per country
    /// (`certification/movie/list`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn movie_certifications(&self) -> Result<Certifications> {
        self.get_json("certification/movie/list", &Query::new())
            .await
    }

    /// Fetches TV certifications per country (`certification/tv/list`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    #[instrument(skip_all)]
    pub async fn tv_certifications(&self) -> Result<Certifications> {
        self.get_json("certification/tv/list", &Query::new()).await
    }
}
