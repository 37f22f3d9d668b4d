use dotenvy::dotenv;
use gala_desk::{
    bot,
    config::event,
    errors::{Error, Result},
};
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the event configuration
    let config_path = event::config_path();
    let gala_config = event::load_or_default(&config_path)
        .inspect(|_| info!("Loaded event configuration from {}", config_path.display()))
        .inspect_err(|e| error!("Failed to load event configuration: {}", e))?;

    // 4. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, Arc::new(gala_config)).await
}
