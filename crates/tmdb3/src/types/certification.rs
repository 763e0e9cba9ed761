//! Certification lists per country.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response from the `certification/{movie,tv}/list` endpoints, keyed
/// by country code (ISO 3166-1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certifications {
    /// Certifications per country.
    #[serde(default)]
    pub certifications: HashMap<String, Vec<Certification>>,
}

/// One certification rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    /// Rating label, e.g. `PG-13`.
    pub certification: String,
    /// Human-readable meaning.
    #[serde(default)]
    pub meaning: String,
    /// Display ordering.
    pub order: u32,
}
