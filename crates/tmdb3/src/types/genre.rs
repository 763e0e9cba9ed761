//! Genre references.

use serde::{Deserialize, Serialize};

/// A resolved genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Localized genre name.
    pub name: String,
}

/// Response from the `genre/{movie,tv}/list` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreList {
    /// Official genres.
    pub genres: Vec<Genre>,
}
