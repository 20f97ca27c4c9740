//! Test utilities (available with the `test-utils` feature).

use std::sync::Arc;

use axum_test::TestServer;

use crate::{
    AppState, build_router,
    config::{Config, DatabaseConfig},
    db::{
        errors::{DbError, Result},
        handlers::RecordStore,
        models::users::UserRecord,
    },
};

/// A store whose every scan fails, as if the database were unreachable.
pub struct FailingStore;

#[async_trait::async_trait]
impl RecordStore for FailingStore {
    async fn scan_users(&self) -> Result<Vec<UserRecord>> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig::Fixture {
            path: "fixtures/users.json".into(),
        },
        ..Default::default()
    }
}

pub fn create_test_server(store: Arc<dyn RecordStore>) -> TestServer {
    let state = AppState::builder().store(store).config(create_test_config()).build();
    let router = build_router(&state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

/// Minimal record with only a city and an income.
pub fn user(city: &str, income: &str) -> UserRecord {
    UserRecord {
        city: Some(city.to_string()),
        income: Some(income.to_string()),
        ..Default::default()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    gender: &str,
    income: &str,
    city: &str,
    car: &str,
    quote: &str,
    phone_price: f64,
) -> UserRecord {
    UserRecord {
        id: Some(id),
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        email: Some(email.to_string()),
        gender: Some(gender.to_string()),
        income: Some(income.to_string()),
        city: Some(city.to_string()),
        car: Some(car.to_string()),
        quote: Some(quote.to_string()),
        phone_price: Some(phone_price),
    }
}

/// A small collection where each endpoint matches a known set of ids.
///
/// | Endpoint | Matching ids |
/// |---|---|
/// | condition1 | 1, 4 |
/// | condition2 | 6 |
/// | condition3 | 9 |
/// | condition4 | 1, 4, 11 |
/// | condition5 | Berlin (4), Lisbon (3), Cairo (2), Osaka, Lima, no city |
pub fn sample_records() -> Vec<UserRecord> {
    vec![
        record(1, "Ada", "Lovelace", "ada.lovelace@example.com", "Female", "$5.00", "Berlin", "BMW", "Imagination is the discovery faculty", 4500.0),
        record(2, "Brian", "Kim", "bkim42@example.com", "Male", "$4.99", "Berlin", "BMW", "Keep going", 9000.0),
        record(3, "Carla", "Diaz", "carla@example.com", "Female", "$100.00", "Lisbon", "Toyota", "Stay curious always", 12000.0),
        record(4, "Dmitri", "Volkov", "dmitri.volkov@example.com", "Male", "$12.50", "Lisbon", "Mercedes-Benz", "Measure twice", 10000.0),
        record(5, "Elena", "Rossi", "erossi7@example.com", "Female", "$12.51", "Berlin", "Audi", "Carpe diem", 2000.0),
        record(6, "Farid", "Haddad", "farid@example.com", "Male", "$8.75", "Cairo", "Toyota", "Patience is bitter", 10001.0),
        record(7, "Gustav", "Meyer", "gus@example.com", "male", "$2.00", "Lisbon", "Kia", "Whatever you are, be a good one", 25000.0),
        record(8, "Hana", "Mori", "hana.mori@example.com", "Female", "$6.10", "Osaka", "Honda", "Less is more ok", 800.0),
        record(9, "Ivan", "Martinez", "imartinez@example.com", "Male", "n/a", "Berlin", "Ford", "Fortune favours the bold", 300.0),
        record(10, "Jun", "Smith", "jsmith@example.com", "Female", "$9.00", "Cairo", "Volvo", "Simplicity is the ultimate sophistication", 1500.0),
        record(11, "Kofi", "Mensah", "kofi.mensah@example.com", "Male", "$1.50", "Lima", "Audi", "Onward", 700.0),
        UserRecord {
            id: Some(12),
            first_name: Some("Lena".to_string()),
            gender: Some("Female".to_string()),
            ..Default::default()
        },
    ]
}
