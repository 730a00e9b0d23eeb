use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use crm_api::{build_router, AppState};
use crm_core::repositories::CustomerRepository;
use crm_infrastructure::{create_pool, run_migrations, PgCustomerRepository};
use crm_shared::config::AppConfig;
use crm_shared::utils::redact_url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes file logs on exit
    let _log_guard = crm_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Connecting to database at {}...", redact_url(&config.database.url));
    let pool = match create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Database connection failed: {}", e);
            return Err(e.into());
        }
    };
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    // Wire repository -> service -> handlers
    let customer_repo: Arc<dyn CustomerRepository> = Arc::new(PgCustomerRepository::new(pool.clone()));
    let state = AppState::new(pool, customer_repo);
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
