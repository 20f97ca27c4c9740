use clap::Parser;
use cohort::{
    Application, Config,
    config::{Args, DatabaseConfig},
    telemetry,
};
use tracing::info;

/// Resolves on Ctrl+C, or SIGTERM on unix, with the name of the signal received
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    }
}

/// One-line description of where records come from, safe to print (no credentials)
fn store_summary(database: &DatabaseConfig) -> String {
    match database {
        DatabaseConfig::External { pool, run_migrations, .. } => format!(
            "{} (max_connections: {}, run_migrations: {})",
            database.kind(),
            pool.max_connections,
            run_migrations
        ),
        DatabaseConfig::Fixture { path } => format!("{} ({})", database.kind(), path.display()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // sqlx and the OTLP exporter both build TLS clients
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let args = Args::parse();
    let config = Config::load(&args)?;

    if args.validate {
        println!("Configuration is valid. Record store: {}", store_summary(&config.database));
        return Ok(());
    }

    telemetry::init_telemetry(config.enable_otel_export)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = %args.config,
        "Starting cohort with record store: {}",
        store_summary(&config.database)
    );

    let app = Application::new(config).await?;
    app.serve(async {
        let signal = shutdown_signal().await;
        info!("Received {signal}, shutting down gracefully...");
    })
    .await
}
