//! Typed client library for the TMDB v3 API.
//!
//! One method per endpoint, one serde model per JSON shape, and a shared
//! request pipeline that injects the credential, resolves the base URL,
//! and validates the response status before any body decoding.
//!
//! ```no_run
//! use tmdb3::TmdbClient;
//!
//! # async fn run() -> tmdb3::Result<()> {
//! let client = TmdbClient::builder()
//!     .api_key("xxxxxxxx")
//!     .language("en-US")
//!     .build()?;
//!
//! let movie = client.movie_details(603, None, &[]).await?;
//! println!("{}", movie.title);
//! # Ok(())
//! # }
//! ```

mod api;
/// Client construction and the shared request pipeline.
pub mod client;
/// Error taxonomy surfaced to callers.
pub mod error;
/// Query parameter accumulation and request modifier tokens.
pub mod params;
/// Response models and shared capability traits.
pub mod types;

pub use client::{TmdbClient, TmdbClientBuilder};
pub use error::TmdbError;
pub use params::{AppendResponse, Query, TimeWindow};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TmdbError>;
