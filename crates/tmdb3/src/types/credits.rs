//! Cast and crew credits, including aggregate credits for shows.

use serde::{Deserialize, Serialize};

/// Response from the `/credits` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    /// Owning resource id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Cast members, ordered by billing.
    #[serde(default)]
    pub cast: Vec<Cast>,
    /// Crew members.
    #[serde(default)]
    pub crew: Vec<Crew>,
}

/// A cast member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Original (untranslated) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Billing order.
    pub order: u32,
    /// Credit record ID.
    pub credit_id: String,
    /// Cast record ID within the movie (movies only).
    #[serde(default)]
    pub cast_id: Option<u32>,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u8>,
    /// Department the person is primarily known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

/// A crew member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Original (untranslated) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Job title, e.g. `Director`.
    pub job: String,
    /// Department, e.g. `Directing`.
    pub department: String,
    /// Credit record ID.
    pub credit_id: String,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Gender code.
    pub gender: Option<u8>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

/// Response from `tv/{id}/aggregate_credits`: credits folded across all
/// episodes of a show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateCredits {
    /// Owning series id, present on standalone responses.
    #[serde(default)]
    pub id: Option<u64>,
    /// Aggregated cast members.
    #[serde(default)]
    pub cast: Vec<AggregateCast>,
    /// Aggregated crew members.
    #[serde(default)]
    pub crew: Vec<AggregateCrew>,
}

/// A cast member aggregated across episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateCast {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Roles played across the show.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Episodes the person appears in.
    pub total_episode_count: u32,
    /// Billing order.
    pub order: u32,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Gender code.
    pub gender: Option<u8>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

/// One role within an aggregated cast credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Credit record ID.
    pub credit_id: String,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Episodes featuring this role.
    pub episode_count: u32,
}

/// A crew member aggregated across episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateCrew {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Jobs performed across the show.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Department, e.g. `Production`.
    pub department: String,
    /// Episodes the person worked on.
    pub total_episode_count: u32,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Gender code.
    pub gender: Option<u8>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

/// One job within an aggregated crew credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Credit record ID.
    pub credit_id: String,
    /// Job title.
    pub job: String,
    /// Episodes covered by this job.
    pub episode_count: u32,
}
