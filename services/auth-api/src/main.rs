//! Catalogo Auth API entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use auth_api::config::Config;
use auth_api::state::AppState;
use catalogo_auth_core::AuthService;
use catalogo_db::pg::PgUserRepository;
use catalogo_db::UserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Catalogo Auth API");

    // Fails fast on a missing or short signing secret
    let config = Config::from_env()?;

    let pool = catalogo_db::connect(&config.database_url).await?;
    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
    let auth = AuthService::new(config.auth, users);

    let state = AppState::new(auth);
    let app = auth_api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
