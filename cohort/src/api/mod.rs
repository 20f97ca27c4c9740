//! HTTP API: route handlers and response models.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /condition1` | [`handlers::users::low_income_luxury_car_users`] |
//! | `GET /condition2` | [`handlers::users::male_high_price_phone_users`] |
//! | `GET /condition3` | [`handlers::users::last_name_m_quote_users`] |
//! | `GET /condition4` | [`handlers::users::luxury_car_no_digit_email_users`] |
//! | `GET /condition5` | [`handlers::users::top_cities_by_user_count`] |
//! | anything else | [`handlers::static_assets::serve_embedded_asset`] |

pub mod handlers;
pub mod models;
