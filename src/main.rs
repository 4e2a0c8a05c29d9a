use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use spendlog::{
    api::start_api_server,
    auth::TokenIssuer,
    storage::{create_pool, run_migrations},
    Config, Result, APP_NAME, VERSION,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (optional - won't fail if missing).
    // This must happen before any config is read from environment.
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    spendlog::init_tracing()?;

    info!(app_name = APP_NAME, version = VERSION, "Starting Spendlog expense API");

    let config = Config::from_env()?;

    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;

    let issuer = Arc::new(TokenIssuer::new(
        config.auth.jwt_secret.as_bytes(),
        Duration::seconds(config.auth.token_ttl_seconds),
    ));

    start_api_server(config.api, pool, issuer).await
}
