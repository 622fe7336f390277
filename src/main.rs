use anyhow::{Context, Result};
use praxis_web::config::Config;
use praxis_web::i18n::{MessageStore, TranslationValidator};
use praxis_web::server;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("praxis_web=info".parse()?),
        )
        .init();

    info!("Starting practice website server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Load message dictionaries (read-only after this point)
    let store = MessageStore::load(&config.messages_dir);

    // Surface missing translations at boot instead of as runtime placeholders
    let report = TranslationValidator::validate(&store);
    for warning in &report.warnings {
        warn!("Translation validation: {}", warning);
    }
    for err in &report.errors {
        error!("Translation validation: {}", err);
    }

    let app = server::build_router(&config, store);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
