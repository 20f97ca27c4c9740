//! Database model for user records.

use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use crate::query::income::Income;

/// A single user record.
///
/// Every attribute is optional: the store does not enforce presence of any field, and absent
/// fields are left out of the serialized JSON rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Currency amount as text, e.g. `"$4.99"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub phone_price: Option<f64>,
}

/// Largest magnitude below which every integer is exactly representable as `f64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers without a fractional part (`4500`, not `4500.0`), as JSON clients
/// of the collection expect.
pub fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER => serializer.serialize_i64(*v as i64),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

impl UserRecord {
    /// Parsed income, or `None` when it is absent or malformed.
    pub fn income_amount(&self) -> Option<f64> {
        self.income.as_deref().and_then(|raw| raw.parse::<Income>().ok()).map(Income::amount)
    }
}
