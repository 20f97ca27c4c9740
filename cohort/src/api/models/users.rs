use serde::{Deserialize, Serialize};

use crate::db::models::users::serialize_number;

/// Per-city summary returned by the top-cities endpoint.
///
/// The city is serialized as `_id`, the grouping key, to keep the wire shape stable for the
/// bundled front-end. Records without a city are grouped under `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    #[serde(rename = "_id")]
    pub city: Option<String>,
    /// Mean parsed income of the city's records; `null` when none had a parseable income
    #[serde(serialize_with = "serialize_number")]
    pub average_income: Option<f64>,
    /// Number of records in the city, including those with unparseable income
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let whole = CitySummary {
            city: Some("Oslo".to_string()),
            average_income: Some(10.0),
            count: 2,
        };
        assert_eq!(
            serde_json::to_string(&whole).unwrap(),
            r#"{"_id":"Oslo","average_income":10,"count":2}"#
        );

        let empty = CitySummary {
            city: None,
            average_income: None,
            count: 1,
        };
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"_id":null,"average_income":null,"count":1}"#
        );
    }
}
