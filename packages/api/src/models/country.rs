use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Current statistics for one country, as returned by `GET /countries`.
///
/// Only the fields the map needs are kept; the rest of the payload is ignored.
/// Counts are shown as sent: the API does report negative `active` values for
/// some countries, and a fractional or null count must not reject the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub country: String,
    pub country_info: CountryInfo,
    #[serde(default, deserialize_with = "lenient_count")]
    pub active: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub recovered: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub deaths: i64,
}

/// Any JSON number (rounded, saturating) or `null` (as 0).
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // `as` saturates and maps NaN to 0.
            Ok(v.round() as i64)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// Numeric ISO code; null for a few non-country entries (e.g. cruise ships).
    #[serde(rename = "_id", default)]
    pub id: Option<u32>,
    pub lat: f64,
    pub long: f64,
}

impl Country {
    /// Stable key for rendering: the numeric id when present, else the name.
    pub fn key(&self) -> String {
        match self.country_info.id {
            Some(id) => id.to_string(),
            None => self.country.clone(),
        }
    }
}
