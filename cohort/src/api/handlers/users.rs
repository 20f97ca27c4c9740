//! Read-only user record endpoints.
//!
//! Each handler scans the record store once and applies one fixed transformation from
//! [`crate::query::filters`]. None of them take parameters.

use axum::{Json, extract::State};
use tracing::debug;

use crate::{
    AppState,
    api::models::users::CitySummary,
    db::models::users::UserRecord,
    errors::Result,
    query::filters,
};

/// `GET /condition1`: BMW or Mercedes-Benz drivers with an income of at least $5
#[tracing::instrument(skip_all)]
pub async fn low_income_luxury_car_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    let records = state.store.scan_users().await?;
    let users = filters::low_income_luxury_car_users(records);
    debug!("Matched {} users", users.len());
    Ok(Json(users))
}

/// `GET /condition2`: male users whose phone cost more than 10,000
#[tracing::instrument(skip_all)]
pub async fn male_high_price_phone_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    let records = state.store.scan_users().await?;
    let users = filters::male_high_price_phone_users(records);
    debug!("Matched {} users", users.len());
    Ok(Json(users))
}

/// `GET /condition3`: last name starting with "M", a quote over 15 characters, and the last name
/// present in the email
#[tracing::instrument(skip_all)]
pub async fn last_name_m_quote_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    let records = state.store.scan_users().await?;
    let users = filters::last_name_m_quote_users(records);
    debug!("Matched {} users", users.len());
    Ok(Json(users))
}

/// `GET /condition4`: BMW, Mercedes-Benz or Audi drivers with no digits in their email
#[tracing::instrument(skip_all)]
pub async fn luxury_car_no_digit_email_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    let records = state.store.scan_users().await?;
    let users = filters::luxury_car_no_digit_email_users(records);
    debug!("Matched {} users", users.len());
    Ok(Json(users))
}

/// `GET /condition5`: the ten cities with the most users, with their average income
#[tracing::instrument(skip_all)]
pub async fn top_cities_by_user_count(State(state): State<AppState>) -> Result<Json<Vec<CitySummary>>> {
    let records = state.store.scan_users().await?;
    let cities = filters::top_cities_by_user_count(records);
    debug!("Summarized {} cities", cities.len());
    Ok(Json(cities))
}
