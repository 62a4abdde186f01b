use std::net::SocketAddr;
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipebox_server::constants::KEEP_ALIVE_INTERVAL_SECS;
use recipebox_server::routes::api_router;
use recipebox_server::{create_pool, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipebox_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RecipeBox Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations complete");

    // Keep-alive ping so the hosting platform does not idle us out
    if config.environment == "production" {
        spawn_keep_alive(config.keep_alive_url.clone());
    }

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .allowed_origins
                .iter()
                .map(|s| s.parse().unwrap())
                .collect::<Vec<_>>(),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
        ])
        .allow_headers(Any);

    // Create app state
    let state = AppState {
        pool: pool.clone(),
        config: config.clone(),
    };

    // Build router
    let app = api_router(state).layer(cors);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET the configured URL every 14 minutes; failures are logged, never fatal
fn spawn_keep_alive(url: Option<String>) {
    let Some(url) = url else {
        tracing::warn!("KEEP_ALIVE_URL not set; skipping keep-alive job");
        return;
    };

    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut interval = tokio::time::interval(Duration::from_secs(KEEP_ALIVE_INTERVAL_SECS));
        interval.tick().await; // first tick fires immediately

        loop {
            interval.tick().await;
            match client.get(&url).send().await {
                Ok(response) => tracing::debug!("Keep-alive ping: {}", response.status()),
                Err(e) => tracing::warn!("Keep-alive ping failed: {}", e),
            }
        }
    });
}
