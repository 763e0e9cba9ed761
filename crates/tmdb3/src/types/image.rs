//! Images and the derived image URL helper.

use serde::{Deserialize, Serialize};

/// Image collections returned by the `/images` endpoints.
///
/// The API only populates the lists that apply to the resource kind;
/// the rest default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Images {
    /// Owning resource id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Backdrop images.
    #[serde(default)]
    pub backdrops: Vec<Image>,
    /// Poster images.
    #[serde(default)]
    pub posters: Vec<Image>,
    /// Logo images.
    #[serde(default)]
    pub logos: Vec<Image>,
    /// Episode still images.
    #[serde(default)]
    pub stills: Vec<Image>,
    /// Profile images (people).
    #[serde(default)]
    pub profiles: Vec<Image>,
}

/// A single image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Opaque path fragment, e.g. `/abc.jpg`.
    pub file_path: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Aspect ratio.
    pub aspect_ratio: f64,
    /// Language of any embedded text (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

/// Size token for derived image URLs.
///
/// The authoritative token list comes from `/configuration`; these are
/// the stable tokens the API has served for years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ImageSize {
    W45,
    W92,
    W154,
    W185,
    W300,
    W342,
    W500,
    W780,
    W1280,
    H632,
    Original,
}

impl ImageSize {
    /// URL path token for this size.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W300 => "w300",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }
}

/// Derives a displayable image URL from a stored path fragment.
///
/// Pure: base URL configuration stays out of the data model. `base_url`
/// comes from `/configuration` (e.g. `https://image.tmdb.org/t/p/`);
/// `path` is a model's `poster_path`/`backdrop_path`/... fragment, which
/// already starts with `/`.
#[must_use]
pub fn image_url(base_url: &str, size: ImageSize, path: &str) -> String {
    format!("{}/{}{}", base_url.trim_end_matches('/'), size.as_str(), path)
}
