//! The record filters and the city aggregation behind the HTTP endpoints.
//!
//! Each function consumes a full scan of the collection, in store order, and returns what the
//! corresponding endpoint serializes. Values derived for matching (parsed income, quote length and
//! so on) are never attached to the returned records.

use std::collections::HashMap;

use crate::{
    api::models::users::CitySummary,
    db::models::users::UserRecord,
    query::predicates::{char_len, contains_ignore_case, has_no_digit, is_one_of, starts_with_m},
};

pub const HIGH_END_BRANDS: [&str; 2] = ["BMW", "Mercedes-Benz"];
pub const LUXURY_BRANDS: [&str; 3] = ["BMW", "Mercedes-Benz", "Audi"];

/// Inclusive lower bound on parsed income for [`low_income_luxury_car_users`].
pub const INCOME_FLOOR: f64 = 5.0;
/// Exclusive lower bound on `phone_price` for [`male_high_price_phone_users`].
pub const PHONE_PRICE_FLOOR: f64 = 10_000.0;
/// Exclusive lower bound on quote length for [`last_name_m_quote_users`].
pub const QUOTE_LENGTH_FLOOR: usize = 15;
pub const TOP_CITIES_LIMIT: usize = 10;

/// BMW or Mercedes-Benz drivers whose parsed income is at least [`INCOME_FLOOR`].
///
/// Records with an absent or unparseable income are excluded.
pub fn low_income_luxury_car_users(records: Vec<UserRecord>) -> Vec<UserRecord> {
    records
        .into_iter()
        .filter(|r| is_one_of(r.car.as_deref(), &HIGH_END_BRANDS))
        .filter(|r| r.income_amount().is_some_and(|income| income >= INCOME_FLOOR))
        .collect()
}

/// Records with gender exactly `"Male"` and a phone price above [`PHONE_PRICE_FLOOR`].
pub fn male_high_price_phone_users(records: Vec<UserRecord>) -> Vec<UserRecord> {
    records
        .into_iter()
        .filter(|r| r.gender.as_deref() == Some("Male"))
        .filter(|r| r.phone_price.is_some_and(|price| price > PHONE_PRICE_FLOOR))
        .collect()
}

/// Last name starting with `M`, a quote longer than [`QUOTE_LENGTH_FLOOR`] characters, and an
/// email containing the last name (case-insensitive).
pub fn last_name_m_quote_users(records: Vec<UserRecord>) -> Vec<UserRecord> {
    records.into_iter().filter(matches_last_name_m_quote).collect()
}

fn matches_last_name_m_quote(record: &UserRecord) -> bool {
    let (Some(last_name), Some(quote), Some(email)) = (&record.last_name, &record.quote, &record.email) else {
        return false;
    };

    starts_with_m(Some(last_name.as_str())) && char_len(quote) > QUOTE_LENGTH_FLOOR && contains_ignore_case(email, last_name)
}

/// BMW, Mercedes-Benz or Audi drivers whose email has no digits at all.
pub fn luxury_car_no_digit_email_users(records: Vec<UserRecord>) -> Vec<UserRecord> {
    records
        .into_iter()
        .filter(|r| is_one_of(r.car.as_deref(), &LUXURY_BRANDS))
        .filter(|r| r.email.as_deref().is_some_and(has_no_digit))
        .collect()
}

#[derive(Default)]
struct CityAccumulator {
    income_sum: f64,
    income_count: u64,
    count: u64,
}

/// The [`TOP_CITIES_LIMIT`] cities with the most records, by descending count.
///
/// Records whose income is absent or unparseable still count towards the city total but are left
/// out of the average. Cities with equal counts keep the order in which they were first seen.
pub fn top_cities_by_user_count(records: Vec<UserRecord>) -> Vec<CitySummary> {
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    let mut groups: Vec<(Option<String>, CityAccumulator)> = Vec::new();

    for record in records {
        let income = record.income_amount();
        let slot = *index.entry(record.city.clone()).or_insert_with(|| {
            groups.push((record.city, CityAccumulator::default()));
            groups.len() - 1
        });

        let acc = &mut groups[slot].1;
        acc.count += 1;
        if let Some(income) = income {
            acc.income_sum += income;
            acc.income_count += 1;
        }
    }

    // Stable sort: ties stay in first-seen order
    groups.sort_by(|a, b| b.1.count.cmp(&a.1.count));
    groups.truncate(TOP_CITIES_LIMIT);

    groups
        .into_iter()
        .map(|(city, acc)| CitySummary {
            city,
            average_income: (acc.income_count > 0).then(|| acc.income_sum / acc.income_count as f64),
            count: acc.count,
        })
        .collect()
}
