//! Watch provider availability.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A streaming/rental provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProvider {
    /// Provider ID.
    pub provider_id: u32,
    /// Provider name, e.g. `Netflix`.
    pub provider_name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Display ordering hint.
    #[serde(default)]
    pub display_priority: Option<u32>,
}

/// Availability in one country, split by monetization model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryWatchProviders {
    /// Attribution link to the TMDB watch page.
    #[serde(default)]
    pub link: Option<String>,
    /// Subscription streaming.
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    /// Rental.
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    /// Purchase.
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
    /// Free with no ads.
    #[serde(default)]
    pub free: Vec<WatchProvider>,
    /// Free with ads.
    #[serde(default)]
    pub ads: Vec<WatchProvider>,
}

/// Response from the `/watch/providers` endpoints, keyed by country
/// code (ISO 3166-1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProviderResult {
    /// Owning resource id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Availability per country.
    #[serde(default)]
    pub results: HashMap<String, CountryWatchProviders>,
}

/// Response from `watch/providers/{movie,tv}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProviderList {
    /// All providers known for the media kind.
    #[serde(default)]
    pub results: Vec<WatchProvider>,
}

/// Response from `watch/providers/regions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProviderRegions {
    /// Countries with watch provider data.
    #[serde(default)]
    pub results: Vec<crate::types::configuration::Country>,
}
