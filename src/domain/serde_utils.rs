//! Serde helpers for identifiers and dates that arrive in more than one shape.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Identifiers that may be sent either as JSON strings or as JSON numbers.
///
/// The FastAPI backend emits integer ids, locally created products use
/// millisecond timestamps and fixtures use short strings; all of them are kept
/// as opaque strings.
pub mod string_or_number {
    use super::{de, fmt, Deserializer, Serializer, Visitor};

    /// Serializes the id as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    /// Deserializes an id from a string, an unsigned or a signed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer product id")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.fract() == 0.0 {
                    Ok(format!("{value:.0}"))
                } else {
                    Err(de::Error::custom(format!("fractional id {value}")))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.trim().is_empty() {
                    return Err(de::Error::custom("empty product id"));
                }
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }
}

/// Calendar dates that may carry a trailing time component.
///
/// `2024-01-15` and `2024-01-15T10:30:00Z` both decode to the same date.
pub mod lenient_date {
    use super::{de, fmt, Deserializer, Serializer, Visitor};
    use chrono::NaiveDate;

    const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Serializes as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATE_FORMAT).to_string())
    }

    /// Deserializes the leading `YYYY-MM-DD` of a date or datetime string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not start with a valid date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateVisitor;

        impl Visitor<'_> for DateVisitor {
            type Value = NaiveDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a YYYY-MM-DD date")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let date_part = value.get(..10).unwrap_or(value);
                NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}

/// Market scores that may be sent as integers or floats.
///
/// Values are rounded and clamped to `0..=100`.
pub mod score {
    use super::{de, fmt, Deserializer, Serializer, Visitor};

    /// Serializes the score as an integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &u8, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*value)
    }

    /// Deserializes a score from any JSON number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScoreVisitor;

        impl Visitor<'_> for ScoreVisitor {
            type Value = u8;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a score between 0 and 100")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(u8::try_from(value.min(100)).unwrap_or(100))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(u8::try_from(value.clamp(0, 100)).unwrap_or(0))
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.is_nan() {
                    return Err(de::Error::custom("score is NaN"));
                }
                Ok(value.round().clamp(0.0, 100.0) as u8)
            }
        }

        deserializer.deserialize_any(ScoreVisitor)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::string_or_number")]
        id: String,
        #[serde(with = "super::lenient_date")]
        created: NaiveDate,
    }

    #[derive(Debug, Deserialize)]
    struct Scored {
        #[serde(with = "super::score")]
        score: u8,
    }

    #[test]
    fn test_score_accepts_float_and_clamps() {
        let s: Scored = serde_json::from_str(r#"{"score": 87.6}"#).unwrap();
        assert_eq!(s.score, 88);
        let s: Scored = serde_json::from_str(r#"{"score": 140}"#).unwrap();
        assert_eq!(s.score, 100);
        let s: Scored = serde_json::from_str(r#"{"score": -3}"#).unwrap();
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let w: Wrapper = serde_json::from_str(r#"{"id": 1718000000000, "created": "2024-01-15"}"#)
            .expect("valid json");
        assert_eq!(w.id, "1718000000000");
    }

    #[test]
    fn test_string_id_kept() {
        let w: Wrapper =
            serde_json::from_str(r#"{"id": "p-7", "created": "2024-01-15"}"#).expect("valid json");
        assert_eq!(w.id, "p-7");
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = serde_json::from_str::<Wrapper>(r#"{"id": " ", "created": "2024-01-15"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_datetime_truncated_to_date() {
        let w: Wrapper =
            serde_json::from_str(r#"{"id": 1, "created": "2024-03-02T10:30:00Z"}"#).expect("json");
        assert_eq!(w.created, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_date_serializes_plain() {
        let w = Wrapper {
            id: "1".to_string(),
            created: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        };
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains(r#""created":"2025-12-01""#));
        assert!(json.contains(r#""id":"1""#));
    }
}
