//! PostgreSQL-backed record store.

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::{
    config::PoolSettings,
    db::{errors::Result, handlers::store::RecordStore, models::users::UserRecord},
};

const SCAN_USERS: &str = r#"
    SELECT id, first_name, last_name, email, gender, income, city, car, quote, phone_price
    FROM users
    ORDER BY row_id
"#;

/// Reads user records from the `users` table.
#[derive(Clone)]
pub struct Users {
    pool: PgPool,
}

impl Users {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against `url` using the configured pool settings.
    pub async fn connect(url: &str, settings: &PoolSettings) -> Result<Self> {
        let mut options = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs));

        if settings.idle_timeout_secs > 0 {
            options = options.idle_timeout(Duration::from_secs(settings.idle_timeout_secs));
        }
        if settings.max_lifetime_secs > 0 {
            options = options.max_lifetime(Duration::from_secs(settings.max_lifetime_secs));
        }

        let pool = options.connect(url).await?;
        info!("Connected to record store (max_connections: {})", settings.max_connections);
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl RecordStore for Users {
    #[instrument(skip(self))]
    async fn scan_users(&self) -> Result<Vec<UserRecord>> {
        let records = sqlx::query_as::<_, UserRecord>(SCAN_USERS).fetch_all(&self.pool).await?;
        debug!("Scanned {} user records", records.len());
        Ok(records)
    }

    async fn close(&self) {
        info!("Closing database connections...");
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert(pool: &PgPool, record: &UserRecord) {
        sqlx::query(
            "INSERT INTO users (id, first_name, last_name, email, gender, income, city, car, quote, phone_price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(record.id)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(&record.gender)
        .bind(&record.income)
        .bind(&record.city)
        .bind(&record.car)
        .bind(&record.quote)
        .bind(record.phone_price)
        .execute(pool)
        .await
        .unwrap();
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_scan_users_returns_insertion_order(pool: PgPool) {
        let records = crate::test_utils::sample_records();
        for record in &records {
            insert(&pool, record).await;
        }

        let store = Users::new(pool);
        let scanned = store.scan_users().await.unwrap();

        assert_eq!(scanned, records);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_scan_users_keeps_nulls(pool: PgPool) {
        insert(
            &pool,
            &UserRecord {
                id: Some(1),
                ..Default::default()
            },
        )
        .await;

        let store = Users::new(pool);
        let scanned = store.scan_users().await.unwrap();

        assert_eq!(
            scanned,
            vec![UserRecord {
                id: Some(1),
                ..Default::default()
            }]
        );
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_scan_fails_after_close(pool: PgPool) {
        let store = Users::new(pool);
        store.close().await;

        assert!(store.scan_users().await.is_err());
    }
}
