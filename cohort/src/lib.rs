//! # cohort: read-only query service over user records
//!
//! `cohort` serves five fixed, parameterless JSON endpoints that filter and aggregate a single
//! collection of user records (demographics, car brand, income, phone price and a free-text
//! quote), plus the embedded front-end that displays them.
//!
//! ## Architecture
//!
//! The HTTP layer is built on [Axum](https://github.com/tokio-rs/axum). Records are read through
//! the [`db::handlers::RecordStore`] trait, either from a PostgreSQL `users` table or from a JSON
//! export loaded into memory. Every request is independent: a handler performs one full scan of the
//! store, applies one transformation from [`query::filters`], and serializes the result. Nothing
//! is cached or shared between requests besides the store handle.
//!
//! ### Request Flow
//!
//! ```text
//! GET /conditionN ─→ handler ─→ RecordStore::scan_users ─→ query::filters ─→ JSON
//!                                       │
//!                                       └─ failure ─→ logged, 500 with empty body
//! GET <anything else> ─→ embedded asset, or index.html
//! ```
//!
//! ### Core Components
//!
//! The **query layer** ([`query`]) holds the matching rules: parsing of currency text, text
//! predicates with fixed case and Unicode semantics, and the five transformations themselves.
//!
//! The **database layer** ([`db`]) provides the store trait, its PostgreSQL and in-memory
//! implementations, and the record model.
//!
//! The **API layer** ([`api`]) maps routes to transformations and serves the front-end.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use cohort::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = cohort::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     cohort::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod query;
mod static_assets;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use config::{CorsOrigin, DatabaseConfig};
use db::handlers::{FixtureStore, RecordStore, Users};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument, warn};

/// Application state shared across all request handlers.
///
/// ```ignore
/// let state = AppState::builder()
///     .store(Arc::new(FixtureStore::new(records)))
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: Config,
}

/// Get the migrator for the bundled `users` table schema
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the record store described by the configuration.
#[instrument(skip_all)]
async fn setup_store(config: &Config) -> anyhow::Result<Arc<dyn RecordStore>> {
    match &config.database {
        DatabaseConfig::External {
            url,
            pool,
            run_migrations,
        } => {
            info!("Using external database");
            let users = Users::connect(url, pool).await?;
            if *run_migrations {
                info!("Running migrations");
                migrator().run(users.pool()).await?;
            }
            Ok(Arc::new(users))
        }
        DatabaseConfig::Fixture { path } => {
            info!("Using fixture records from {}", path.display());
            let store = FixtureStore::load(path).await?;
            if store.is_empty() {
                warn!("Fixture {} holds no user records; every query will return []", path.display());
            }
            Ok(Arc::new(store))
        }
    }
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors_config = &config.cors;

    let allow_origin = if cors_config.allowed_origins.iter().any(|o| matches!(o, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &cors_config.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                origins.push(url.origin().ascii_serialization().parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_credentials(cors_config.allow_credentials);

    if let Some(max_age) = cors_config.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router.
///
/// - `/condition1` … `/condition5` query endpoints
/// - `/internal/metrics` when metrics are enabled
/// - embedded front-end for every other path
/// - CORS and request tracing on everything
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    use api::handlers::users;

    let mut router = Router::new()
        .route("/condition1", get(users::low_income_luxury_car_users))
        .route("/condition2", get(users::male_high_price_phone_users))
        .route("/condition3", get(users::last_name_m_quote_users))
        .route("/condition4", get(users::luxury_car_no_digit_email_users))
        .route("/condition5", get(users::top_cities_by_user_count))
        .with_state(state.clone());

    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        router = router
            .route(
                "/internal/metrics",
                get(move || {
                    let metric_handle = metric_handle.clone();
                    async move { metric_handle.render() }
                }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .fallback(api::handlers::static_assets::serve_embedded_asset)
        .layer(create_cors_layer(&state.config)?)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

/// The assembled service: configuration, record store and router.
///
/// 1. **Create**: [`Application::new`] opens the configured store (running migrations if asked)
///    and builds the router
/// 2. **Serve**: [`Application::serve`] binds the TCP listener and handles requests
/// 3. **Shutdown**: when the shutdown future resolves, in-flight requests finish, then the store
///    and telemetry are closed
pub struct Application {
    router: Router,
    config: Config,
    store: Arc<dyn RecordStore>,
}

impl Application {
    /// Create a new application instance with the store named in the configuration
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting with configuration: {:#?}", config);

        let store = setup_store(&config).await?;
        Self::new_with_store(config, store)
    }

    /// Create an application around an already-open store
    pub fn new_with_store(config: Config, store: Arc<dyn RecordStore>) -> anyhow::Result<Self> {
        let state = AppState::builder().store(store.clone()).config(config.clone()).build();
        let router = build_router(&state)?;

        Ok(Self { router, config, store })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Server listening on http://{}", bind_addr);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        self.store.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
