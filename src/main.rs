use anyhow::Result;
use hosting_storefront::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hosting_storefront=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting hosting storefront");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Translation tables are loaded once and shared for the process lifetime
    let state = server::build_state(&config)?;

    server::serve(&config, state).await
}
