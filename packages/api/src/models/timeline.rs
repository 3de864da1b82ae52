//! Historical series from `GET /historical/all`.
//!
//! The API returns each series as a JSON object keyed by date
//! (`{"1/22/20": 557, "1/23/20": 657, ...}`). The keys are `M/D/YY` strings,
//! which do not sort chronologically, so the series keep the order in which
//! the entries were received instead of going through a `HashMap`/`BTreeMap`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One `(date, cumulative count)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: String,
    pub value: u64,
}

impl TimelinePoint {
    pub fn new(date: impl Into<String>, value: u64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasesTimeline {
    #[serde(with = "ordered_series")]
    pub cases: Vec<TimelinePoint>,
    #[serde(with = "ordered_series", default)]
    pub deaths: Vec<TimelinePoint>,
    #[serde(with = "ordered_series", default)]
    pub recovered: Vec<TimelinePoint>,
}

mod ordered_series {
    use super::*;

    pub fn serialize<S>(points: &[TimelinePoint], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(points.len()))?;
        for point in points {
            map.serialize_entry(&point.date, &point.value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<TimelinePoint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SeriesVisitor)
    }

    struct SeriesVisitor;

    impl<'de> Visitor<'de> for SeriesVisitor {
        type Value = Vec<TimelinePoint>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of date strings to counts")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut points = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((date, value)) = access.next_entry::<String, u64>()? {
                points.push(TimelinePoint { date, value });
            }
            Ok(points)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_keep_received_order() {
        let timeline: CasesTimeline =
            serde_json::from_str(r#"{"cases": {"1/1/21": 10, "1/2/21": 12}}"#).unwrap();

        assert_eq!(
            timeline.cases,
            vec![TimelinePoint::new("1/1/21", 10), TimelinePoint::new("1/2/21", 12)]
        );
        assert!(timeline.deaths.is_empty());
        assert!(timeline.recovered.is_empty());
    }

    #[test]
    fn test_order_is_not_lexicographic() {
        let timeline: CasesTimeline = serde_json::from_str(
            r#"{"cases": {"9/30/20": 1, "10/1/20": 2, "1/1/21": 3}, "deaths": {"9/30/20": 0}}"#,
        )
        .unwrap();
        let dates: Vec<&str> = timeline.cases.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["9/30/20", "10/1/20", "1/1/21"]);
        assert_eq!(timeline.deaths.len(), 1);
    }

    #[test]
    fn test_missing_cases_is_an_error() {
        assert!(serde_json::from_str::<CasesTimeline>(r#"{"deaths": {}}"#).is_err());
        assert!(serde_json::from_str::<CasesTimeline>(r#"{"cases": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_serializes_back_to_date_map() {
        let timeline = CasesTimeline {
            cases: vec![TimelinePoint::new("1/2/21", 12), TimelinePoint::new("1/1/21", 10)],
            ..Default::default()
        };
        let json = serde_json::to_string(&timeline).unwrap();
        assert!(json.starts_with(r#"{"cases":{"1/2/21":12,"1/1/21":10}"#));
    }
}
