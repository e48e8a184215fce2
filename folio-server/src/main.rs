use folio_server::storage::PhotoStore;
use folio_server::{AppState, build_router, logger};

use folio_auth::{JwtValidator, TokenIssuer};
use folio_db::CollectionBootstrap;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = folio_config::Config::load()?;
    config.validate()?;

    let config_dir = folio_config::Config::config_dir()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.logging.file_path(&config_dir);
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Session tokens cannot be issued without a secret
    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or("auth.jwt_secret must be set (config or FOLIO_JWT_SECRET)")?;

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = folio_db::connection::connect(&database_path).await?;
    info!("Database connection established");

    // Bootstrap record collections (best-effort, also retried on access)
    let bootstrap = Arc::new(CollectionBootstrap::new(pool.clone()));
    bootstrap.initialize_all().await;

    let ttl_secs = i64::try_from(config.auth.token_ttl_secs).unwrap_or(i64::MAX);
    let issuer = Arc::new(TokenIssuer::with_hs256(jwt_secret.as_bytes(), ttl_secs));
    let validator = Arc::new(JwtValidator::with_hs256(jwt_secret.as_bytes()));

    let photos = Arc::new(PhotoStore::new(config_dir.join("photos")));

    // Build application state
    let app_state = AppState {
        pool,
        bootstrap,
        issuer,
        validator,
        photos,
        easy_auth_base: config.auth.easy_auth_base_url.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on ctrl-c
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
