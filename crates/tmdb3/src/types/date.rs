//! Serde adapters for TMDB calendar-date fields.
//!
//! The API represents unknown dates as `""` or `null` (both map to
//! `None`); a malformed non-empty date string fails decoding. Use with
//! `#[serde(default, with = "crate::types::date")]` so a missing field
//! also maps to `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

/// Deserializes an optional `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error when the value is a non-empty string that is not a
/// valid calendar date.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, FORMAT)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}"))),
    }
}

/// Serializes an optional date as `YYYY-MM-DD` or `null`.
///
/// # Errors
///
/// Propagates serializer errors only.
pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Dated {
        #[serde(default, with = "super")]
        release_date: Option<NaiveDate>,
    }

    #[test]
    fn test_valid_date_parses() {
        // Arrange & Act
        let dated: Dated = serde_json::from_str(r#"{"release_date":"1999-03-30"}"#).unwrap();

        // Assert
        assert_eq!(
            dated.release_date,
            Some(NaiveDate::from_ymd_opt(1999, 3, 30).unwrap())
        );
    }

    #[test]
    fn test_missing_field_is_none() {
        // Arrange & Act
        let dated: Dated = serde_json::from_str("{}").unwrap();

        // Assert
        assert_eq!(dated.release_date, None);
    }

    #[test]
    fn test_null_is_none() {
        // Arrange & Act
        let dated: Dated = serde_json::from_str(r#"{"release_date":null}"#).unwrap();

        // Assert
        assert_eq!(dated.release_date, None);
    }

    #[test]
    fn test_empty_string_is_none() {
        // Arrange & Act
        let dated: Dated = serde_json::from_str(r#"{"release_date":""}"#).unwrap();

        // Assert
        assert_eq!(dated.release_date, None);
    }

    #[test]
    fn test_malformed_date_fails() {
        // Arrange & Act
        let result = serde_json::from_str::<Dated>(r#"{"release_date":"20XX-01-01"}"#);

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid date"));
    }

    #[test]
    fn test_serializes_back_to_iso_string() {
        // Arrange
        let dated = Dated {
            release_date: Some(NaiveDate::from_ymd_opt(1999, 3, 30).unwrap()),
        };

        // Act
        let json = serde_json::to_string(&dated).unwrap();

        // Assert
        assert_eq!(json, r#"{"release_date":"1999-03-30"}"#);
    }
}
