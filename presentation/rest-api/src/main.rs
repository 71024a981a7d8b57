use std::sync::Arc;

use dotenvy::dotenv;
use tokio::sync::broadcast::error::RecvError;

mod api;
mod config;
mod setup;

use business::domain::cart::events::CartNotifier;
use business::domain::recommendation::use_cases::warm_cache::{WarmCacheParams, WarmCacheUseCase};
use business::domain::shared::value_objects::Language;
use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, OpenAI, catalog, database)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    if !config.openai.ai_enabled() {
        tracing::warn!("OPENAI_API_KEY not set, recommendations run in degraded mode");
    }

    // 4. Initialize blob store
    let store = database_config::init_store().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config, store).await?;

    // 6. Background tasks
    if config.recommendation.cache_warmup_enabled && config.openai.ai_enabled() {
        spawn_cache_warmup(container.warm_cache_use_case.clone());
    }
    spawn_cart_event_log(&container.cart_notifier);

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}

fn spawn_cache_warmup(use_case: Arc<dyn WarmCacheUseCase>) {
    tokio::spawn(async move {
        use_case
            .execute(WarmCacheParams {
                languages: Language::ALL.to_vec(),
            })
            .await;
    });
}

fn spawn_cart_event_log(notifier: &CartNotifier) {
    let mut events = notifier.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    tracing::debug!(session = %event.session_id, "Cart changed: {:?}", event.kind)
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!("Cart event log lagged, {} events missed", missed)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}
