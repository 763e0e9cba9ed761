//! The paged result envelope.

use serde::{Deserialize, Serialize};

/// One page of a larger result set, plus pagination metadata.
///
/// A pure transport envelope: the client never validates
/// `results.len() <= total_results` and never aggregates across pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Current page number (1-based).
    pub page: u32,
    /// Entities on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results across all pages.
    pub total_results: u32,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::media::Movie;

    #[test]
    fn test_page_metadata_decodes_intact() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/popular_movies_page.json");

        // Act
        let page: PageResult<Movie> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.results.len(), 20);
        assert_eq!(page.total_results, 100);
    }

    #[test]
    fn test_missing_results_defaults_to_empty() {
        // Arrange
        let json = r#"{"page":1,"total_pages":0,"total_results":0}"#;

        // Act
        let page: PageResult<Movie> = serde_json::from_str(json).unwrap();

        // Assert
        assert!(page.results.is_empty());
    }
}
