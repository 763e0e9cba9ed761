//! Query parameter accumulation and request modifier tokens.

/// Accumulates query parameters for a single request.
///
/// Absent parameters are omitted entirely, never sent as empty values;
/// multi-valued parameters are serialized as one comma-joined string.
#[derive(Debug, Clone, Default)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter unconditionally.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    /// Appends a parameter only when a value is present.
    pub fn push_opt(&mut self, key: &'static str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.0.push((key, value.into()));
        }
    }

    /// Appends a multi-valued parameter as a comma-joined string,
    /// preserving input order. An empty slice is omitted.
    pub fn push_join<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(",");
            self.0.push((key, joined));
        }
    }

    /// Appends the `append_to_response` parameter for a non-empty list.
    pub fn push_append(&mut self, append: &[AppendResponse]) {
        let tokens: Vec<&str> = append.iter().map(|a| a.as_str()).collect();
        self.push_join("append_to_response", &tokens);
    }

    /// Returns `true` when no parameter has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the accumulated pairs for `reqwest::RequestBuilder::query`.
    #[must_use]
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Sub-resources that can be inlined into a primary response via
/// `append_to_response`, saving one round trip each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendResponse {
    /// Cast and crew (`credits`).
    Credits,
    /// Episode-spanning cast and crew for shows (`aggregate_credits`).
    AggregateCredits,
    /// Posters, backdrops, logos, stills (`images`).
    Images,
    /// IMDB/TVDB/social ids (`external_ids`).
    ExternalIds,
    /// Localized title/overview variants (`translations`).
    Translations,
    /// Trailers and clips (`videos`).
    Videos,
    /// Streaming availability per country (`watch/providers`).
    WatchProviders,
    /// Per-country release dates and certifications (`release_dates`).
    ReleaseDates,
    /// Per-country TV content ratings (`content_ratings`).
    ContentRatings,
    /// Related titles (`recommendations`).
    Recommendations,
    /// Similar titles (`similar`).
    Similar,
}

impl AppendResponse {
    /// External token as the API expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::AggregateCredits => "aggregate_credits",
            Self::Images => "images",
            Self::ExternalIds => "external_ids",
            Self::Translations => "translations",
            Self::Videos => "videos",
            Self::WatchProviders => "watch/providers",
            Self::ReleaseDates => "release_dates",
            Self::ContentRatings => "content_ratings",
            Self::Recommendations => "recommendations",
            Self::Similar => "similar",
        }
    }
}

/// Time window for the trending endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Trending over the last 24 hours.
    Day,
    /// Trending over the last 7 days.
    Week,
}

impl TimeWindow {
    /// Path segment as the API expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_push_opt_none_is_omitted() {
        // Arrange
        let mut query = Query::new();

        // Act
        query.push_opt("language", None::<String>);
        query.push_opt("region", Some("JP"));

        // Assert
        assert_eq!(query.as_slice(), &[("region", String::from("JP"))]);
        assert!(!query.as_slice().iter().any(|(k, _)| *k == "language"));
    }

    #[test]
    fn test_push_join_preserves_order() {
        // Arrange
        let mut query = Query::new();

        // Act
        query.push_join("with_genres", &["16", "10765"]);

        // Assert
        assert_eq!(query.as_slice(), &[("with_genres", String::from("16,10765"))]);
    }

    #[test]
    fn test_push_join_empty_is_omitted() {
        // Arrange
        let mut query = Query::new();

        // Act
        query.push_join::<&str>("with_genres", &[]);

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_push_append_comma_joins_tokens() {
        // Arrange
        let mut query = Query::new();

        // Act
        query.push_append(&[AppendResponse::Credits, AppendResponse::Images]);

        // Assert
        assert_eq!(
            query.as_slice(),
            &[("append_to_response", String::from("credits,images"))]
        );
    }

    #[test]
    fn test_push_append_empty_is_omitted() {
        // Arrange
        let mut query = Query::new();

        // Act
        query.push_append(&[]);

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_time_window_tokens() {
        // Arrange & Act & Assert
        assert_eq!(TimeWindow::Day.as_str(), "day");
        assert_eq!(TimeWindow::Week.as_str(), "week");
    }
}
